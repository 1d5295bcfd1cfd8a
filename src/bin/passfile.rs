//! Interactive password store: add entries, encrypt / decrypt the file in place

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use passfile_vault::aliases::KeyHex;
use passfile_vault::file_ops::{
    create_file_if_missing, decrypt_file_in_place, delete_file, encrypt_file_in_place,
};
use passfile_vault::key_ops::{generate_key_hex, parse_hex_key};
use passfile_vault::records::{append_entry, PasswordEntry};
use passfile_vault::{load_config, CipherSuite};
use rpassword::prompt_password;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// ANSI colors, chosen once at startup and passed around by value
#[derive(Clone, Copy)]
struct Palette {
    reset: &'static str,
    red: &'static str,
    yellow: &'static str,
    green: &'static str,
}

impl Palette {
    const ANSI: Palette = Palette {
        reset: "\x1b[0m",
        red: "\x1b[31m",
        yellow: "\x1b[33m",
        green: "\x1b[32m",
    };

    const PLAIN: Palette = Palette {
        reset: "",
        red: "",
        yellow: "",
        green: "",
    };

    fn detect(enabled: bool) -> Self {
        if enabled && !cfg!(windows) && std::env::var_os("NO_COLOR").is_none() {
            Self::ANSI
        } else {
            Self::PLAIN
        }
    }
}

enum MenuChoice {
    AddEntry,
    Encrypt,
    Decrypt,
    Delete,
    Exit,
}

impl MenuChoice {
    fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::AddEntry),
            "2" => Some(MenuChoice::Encrypt),
            "3" => Some(MenuChoice::Decrypt),
            "4" => Some(MenuChoice::Delete),
            "5" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

struct Session {
    path: PathBuf,
    suite: CipherSuite,
    key_hex: KeyHex,
    palette: Palette,
}

/// Print `message` and read one trimmed line. `None` on end of input.
fn prompt(palette: Palette, message: &str) -> Result<Option<String>> {
    print!("{}{message}{}", palette.green, palette.reset);
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_owned()))
}

fn add_entry(session: &Session) -> Result<()> {
    let p = session.palette;
    let Some(website) = prompt(p, "\nEnter the website: ")? else {
        return Ok(());
    };
    let Some(username) = prompt(p, "\nEnter the username: ")? else {
        return Ok(());
    };
    let Some(password) = prompt(p, "\nEnter the password: ")? else {
        return Ok(());
    };

    let entry = PasswordEntry::new(website, username, password);
    match append_entry(&session.path, entry.clone()) {
        Ok(_) => println!(
            "{}\nWebsite: {} \nUsername: {} \nPassword: {}{}",
            p.yellow, entry.website, entry.username, entry.password, p.reset
        ),
        Err(e) => println!(
            "{}\nCould not add the entry (is the file encrypted?): {e}{}",
            p.red, p.reset
        ),
    }
    Ok(())
}

fn encrypt(session: &Session) -> Result<()> {
    let p = session.palette;
    let key = parse_hex_key(session.key_hex.expose_secret())
        .context("session key is not valid hex")?;

    match encrypt_file_in_place(&session.path, &key) {
        Ok(size) => {
            info!(path = %session.path.display(), size, suite = %session.suite, "file encrypted");
            println!(
                "{}\nKeep your key in a secure place to decrypt. Your key is: {}{}",
                p.red,
                session.key_hex.expose_secret(),
                p.reset
            );
        }
        Err(e) => println!("{}\nEncryption failed: {e}{}", p.red, p.reset),
    }
    Ok(())
}

fn decrypt(session: &Session) -> Result<()> {
    let p = session.palette;
    let expected = session.suite.hex_len();
    let input = KeyHex::new(prompt_password(format!(
        "{}\nEnter your {expected}-character key: {}",
        p.green, p.reset
    ))?);

    let key = match parse_hex_key(input.expose_secret()) {
        Ok(key) => key,
        Err(e) => {
            println!("{}\nError: {e}{}", p.red, p.reset);
            return Ok(());
        }
    };

    match decrypt_file_in_place(&session.path, &key) {
        Ok(size) => {
            info!(path = %session.path.display(), size, "file decrypted");
            println!("{}\nFile decrypted.{}", p.yellow, p.reset);
        }
        Err(e) => {
            error!(path = %session.path.display(), error = %e, "decryption failed");
            println!("{}\nDecryption failed (wrong key?): {e}{}", p.red, p.reset);
        }
    }
    Ok(())
}

fn choose_path(palette: Palette, default: &Path) -> Result<Option<PathBuf>> {
    if let Some(arg) = std::env::args_os().nth(1) {
        return Ok(Some(PathBuf::from(arg)));
    }
    let message = format!(
        "\nWelcome to the password manager, which json or txt file would you like to use? [{}]\n",
        default.display()
    );
    Ok(prompt(palette, &message)?.map(|answer| {
        if answer.is_empty() {
            default.to_path_buf()
        } else {
            PathBuf::from(answer)
        }
    }))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let config = load_config();
    let palette = Palette::detect(config.ui.color);
    let suite = config
        .cipher_suite()
        .context("unsupported key size in config")?;
    let key_hex = generate_key_hex(suite).context("system entropy source unavailable")?;

    let Some(path) = choose_path(palette, &config.paths.store)? else {
        return Ok(());
    };
    if create_file_if_missing(&path)
        .with_context(|| format!("failed to create {}", path.display()))?
    {
        println!(
            "{}\nFile does not exist, created {}{}",
            palette.yellow,
            path.display(),
            palette.reset
        );
    }

    let session = Session {
        path,
        suite,
        key_hex,
        palette,
    };

    loop {
        println!(
            "{}\n1: Add a username and password 2: Encrypt your file 3: Decrypt your file 4: Delete file 5: Exit\n{}",
            palette.yellow, palette.reset
        );
        let Some(input) = prompt(palette, "Enter your option: ")? else {
            break;
        };

        match MenuChoice::parse(&input) {
            Some(MenuChoice::AddEntry) => add_entry(&session)?,
            Some(MenuChoice::Encrypt) => encrypt(&session)?,
            Some(MenuChoice::Decrypt) => decrypt(&session)?,
            Some(MenuChoice::Delete) => {
                delete_file(&session.path)
                    .with_context(|| format!("failed to remove {}", session.path.display()))?;
                println!(
                    "{}\n{} has been removed. Restart to use another file.{}",
                    palette.red,
                    session.path.display(),
                    palette.reset
                );
                break;
            }
            Some(MenuChoice::Exit) => {
                println!(
                    "{}\nThank you for using the password manager, exiting...{}",
                    palette.yellow, palette.reset
                );
                break;
            }
            None => println!(
                "{}\nInvalid choice, please choose one of the given options{}",
                palette.red, palette.reset
            ),
        }
    }

    Ok(())
}
