use clap::{Arg, Command}; // Import necessary modules from clap for command-line argument parsing
use std::io; // For reading the line to encrypt from stdin
use std::process;

use passcipher::{initialize_logging, AesCryptographer, Cryptographer};

// Main function: derive a key/IV pair from a password and salt, then
// encrypt and decrypt one line of text as a demonstration
fn main() {
    if let Err(e) = initialize_logging() {
        eprintln!("Failed to initialize logging: {}", e);
    }

    // Define the command-line interface using clap
    let matches = Command::new("passcipher")
        .about("Encrypt and decrypt a line of text with a password-derived AES-256 key")
        .arg(
            Arg::new("password")
                .long("password")
                .help("Password used to derive the key and IV (prompted when omitted)")
                .value_name("PASSWORD"),
        )
        .arg(
            Arg::new("salt")
                .long("salt")
                .help("Salt used to derive the key and IV")
                .value_name("SALT")
                .default_value("my salt value"),
        )
        .get_matches(); // Parse the command-line arguments

    // Get the password securely when it was not passed as a flag
    let password = match matches.get_one::<String>("password") {
        Some(password) => password.clone(),
        None => {
            println!("Please enter your password:");
            match rpassword::read_password() {
                Ok(password) => password,
                Err(e) => {
                    eprintln!("Failed to read password: {}", e);
                    process::exit(1);
                }
            }
        }
    };
    let salt = matches.get_one::<String>("salt").unwrap(); // Has a default value

    // Derive the key and IV from the password and salt
    let cryptographer = AesCryptographer::new();
    let (key, iv) = match cryptographer.derive_key_and_iv(&password, salt, None) {
        Ok(pair) => pair,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    println!("Enter a line to encrypt, then hit the enter key");
    let mut value = String::new();
    if let Err(e) = io::stdin().read_line(&mut value) {
        eprintln!("Failed to read input: {}", e);
        process::exit(1);
    }
    let value = value.trim_end_matches('\n').trim_end_matches('\r');

    // Encrypt the value
    let encrypted = match cryptographer.encrypt_text(&key, &iv, value, None) {
        Ok(encrypted) => encrypted,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    // Decrypt the value
    let decrypted = match cryptographer.decrypt_text(&key, &iv, &encrypted, None) {
        Ok(decrypted) => decrypted,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    println!();
    println!("Here is the value encrypted: {}", encrypted);
    println!("Here is the value decrypted: {}", decrypted);

    println!();
    println!("done");
}
