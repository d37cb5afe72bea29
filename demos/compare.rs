//! Print a few comparisons between loosely-formatted versions.

use loose_versions::{Error, Version};

fn main() -> Result<(), Error> {
    let pairs = [
        ("1.1.3", "<", "2.2.3"),
        ("1.3.0", ">", "0.3.0"),
        ("0.3.0b", "<", "1.2.42"),
        ("1.3.42", "==", "42.3.1"),
    ];

    for (l, op, r) in pairs {
        let a = Version::new(l)?;
        let b = Version::new(r)?;
        let result = match op {
            "<" => a < b,
            ">" => a > b,
            _ => a == b,
        };

        println!("Version('{a}') {op} Version('{b}'): {result}");
    }

    Ok(())
}
