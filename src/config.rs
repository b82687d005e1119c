use std::path::PathBuf;
use std::str::FromStr;

const INPUT_VAR: &str = "SCORE_HEAP_INPUT";
const FORMAT_VAR: &str = "SCORE_HEAP_FORMAT";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Stdin,
    File(PathBuf),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    #[default]
    Text,
    Json,
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Format::Text),
            "json" => Ok(Format::Json),
            other => Err(format!("unknown output format '{}', expected text or json", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub input: Input,
    pub format: Format,
}

impl Config {
    /// Builds the config from command-line arguments (program name first),
    /// falling back to `SCORE_HEAP_INPUT` / `SCORE_HEAP_FORMAT`.
    pub fn new(args: &[String]) -> Result<Config, String> {
        Self::with_env(
            args,
            std::env::var(INPUT_VAR).ok(),
            std::env::var(FORMAT_VAR).ok(),
        )
    }

    fn with_env(
        args: &[String],
        env_input: Option<String>,
        env_format: Option<String>,
    ) -> Result<Config, String> {
        let mut path: Option<String> = None;
        let mut format = None;

        for arg in args.iter().skip(1) {
            match arg.as_str() {
                "--json" => format = Some(Format::Json),
                "--text" => format = Some(Format::Text),
                flag if flag.starts_with("--") => return Err(format!("unknown flag '{}'", flag)),
                _ if path.is_some() => return Err(format!("unexpected argument '{}'", arg)),
                _ => path = Some(arg.clone()),
            }
        }

        let input = match path.or(env_input) {
            None => Input::Stdin,
            Some(p) if p == "-" => Input::Stdin,
            Some(p) => Input::File(PathBuf::from(p)),
        };

        let format = match (format, env_format) {
            (Some(format), _) => format,
            (None, Some(value)) => value.parse()?,
            (None, None) => Format::default(),
        };

        Ok(Config { input, format })
    }
}
