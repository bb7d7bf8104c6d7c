use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use pwd_forge::{calculate_password_strength, generate_password, GeneratorError, PasswordOptions};

/// Generate random passwords and print their strength.
#[derive(Parser, Debug)]
#[command(name = "pwd-forge", version)]
struct Cli {
    /// Password length
    #[arg(long, short, allow_negative_numbers = true)]
    length: Option<i64>,

    /// Number of passwords to generate
    #[arg(long, short, default_value_t = 1)]
    count: usize,

    #[arg(long)]
    no_uppercase: bool,

    #[arg(long)]
    no_lowercase: bool,

    #[arg(long)]
    no_numbers: bool,

    #[arg(long)]
    no_special: bool,

    /// Score this password instead of generating
    #[arg(long)]
    score: Option<String>,
}

impl Cli {
    fn is_customized(&self) -> bool {
        self.length.is_some()
            || self.count != 1
            || self.no_uppercase
            || self.no_lowercase
            || self.no_numbers
            || self.no_special
    }

    /// A positive length shorter than the number of enabled classes can
    /// never be satisfied.
    fn unsatisfiable_length(&self, options: &PasswordOptions) -> Option<String> {
        let classes = options.enabled_classes().len();
        (options.length > 0 && (options.length as u64) < classes as u64).then(|| {
            format!(
                "length {} is shorter than the {} enabled character classes",
                options.length, classes
            )
        })
    }

    fn options(&self) -> PasswordOptions {
        let defaults = PasswordOptions::default();
        PasswordOptions {
            length: self.length.unwrap_or(defaults.length),
            include_uppercase: !self.no_uppercase,
            include_lowercase: !self.no_lowercase,
            include_numbers: !self.no_numbers,
            include_special_chars: !self.no_special,
        }
    }
}

fn main() -> Result<(), GeneratorError> {
    let cli = Cli::parse();

    if let Some(password) = &cli.score {
        println!("Password Strength: {}", calculate_password_strength(password));
        return Ok(());
    }

    if cli.is_customized() {
        let options = cli.options();
        if let Some(msg) = cli.unsatisfiable_length(&options) {
            Cli::command().error(ErrorKind::ValueValidation, msg).exit();
        }
        for _ in 0..cli.count {
            let password = generate_password(&options)?;
            println!("{}\t{}", password, calculate_password_strength(&password));
        }
        return Ok(());
    }

    let password = generate_password(&PasswordOptions::default())?;
    println!("Generated Password: {}", password);
    println!("Password Strength: {}", calculate_password_strength(&password));

    let custom = PasswordOptions::default().with_length(16);
    let custom_password = generate_password(&custom)?;
    println!("\nCustom Password: {}", custom_password);
    println!("Custom Password Strength: {}", calculate_password_strength(&custom_password));

    Ok(())
}
