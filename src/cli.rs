use std::env;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CliOptions {
    pub sample: bool,
    pub table: bool,
    pub theme: Option<String>,
}

pub const USAGE: &str = "Usage: calboard [--sample] [--table] [--theme NAME]";

pub fn parse_cli_mode() -> Result<CliOptions, String> {
    parse_args(env::args().skip(1))
}

pub fn parse_args<I>(args: I) -> Result<CliOptions, String>
where
    I: IntoIterator<Item = String>,
{
    let mut options = CliOptions::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--sample" => options.sample = true,
            "--table" => options.table = true,
            "--theme" => {
                let name = args
                    .next()
                    .filter(|name| !name.starts_with("--"))
                    .ok_or_else(|| "--theme requires a theme name".to_string())?;
                options.theme = Some(name);
            }
            "--help" | "-h" => {
                println!("{}", USAGE);
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown argument: {}", arg)),
        }
    }

    Ok(options)
}
