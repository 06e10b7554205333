// Folio - admin password hash generator
//
// Prints a value for ADMIN_PASSWORD_HASH. Reads the password from the first
// argument, or from the first line of stdin when no argument is given.

use std::io::BufRead;

use anyhow::Context;

fn main() -> anyhow::Result<()> {
    let password = match std::env::args().nth(1) {
        Some(password) => password,
        None => {
            let mut line = String::new();
            std::io::stdin()
                .lock()
                .read_line(&mut line)
                .context("Failed to read password from stdin")?;
            line.trim_end_matches(['\r', '\n']).to_string()
        }
    };

    if password.is_empty() {
        anyhow::bail!("Password must not be empty");
    }

    let hash = folio_common::hash_secret(&password)?;
    println!("{}", hash);
    Ok(())
}
