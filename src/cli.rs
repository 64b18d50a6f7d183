use crate::config::Config;
use crate::render::terminal::TerminalConfig;
use crate::rules::RuleSet;
use crate::tile::Terrain;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::PathBuf;
use std::time::Duration;
use structopt::clap::Shell;
use structopt::StructOpt;
use structopt_flags::QuietVerbose;

/// Parses a JSON object mapping terrain names to the terrains allowed next to
/// them, e.g. `{"mountain": ["mountain", "forest"], ...}`.
pub fn parse_rules<R: Read>(reader: R) -> Result<RuleSet<Terrain>, String> {
    let rules: RuleSet<Terrain> = serde_json::from_reader(reader)
        .map_err(|e| format!("Failed to parse rules file: {}", e))?;

    rules.validate().map_err(|e| e.to_string())?;

    Ok(rules)
}

fn load_rules(s: &str) -> Result<RuleSet<Terrain>, String> {
    let path = PathBuf::from(s);
    let file = File::open(path).map_err(|e| format!("Failed to open rules file: {}", e))?;

    parse_rules(BufReader::new(file))
}

#[derive(Debug)]
pub struct AppConfig {
    pub generation: Config<Terrain>,
    pub seed: Option<u64>,
    pub attempts: usize,
    pub renderer: TerminalConfig,
}

#[derive(Debug, StructOpt)]
#[structopt(
    name = "Terrain Collapse",
    about = "Generate terrain maps with a simplified wave function collapse"
)]
pub struct Opt {
    #[structopt(flatten)]
    pub verbose: QuietVerbose,

    #[structopt(
        short,
        long,
        default_value = "10",
        help = "Tiles per side of the generated map"
    )]
    size: usize,

    #[structopt(long, help = "Random seed")]
    seed: Option<u64>,

    #[structopt(
        short,
        long,
        parse(try_from_str = load_rules),
        help = "JSON file with adjacency rules"
    )]
    rules: Option<RuleSet<Terrain>>,

    #[structopt(
        short,
        long,
        default_value = "100",
        help = "Milliseconds between animation frames"
    )]
    delay: u64,

    #[structopt(long, help = "Only print the finished map")]
    no_animate: bool,

    #[structopt(long, help = "Print glyphs without colours")]
    plain: bool,

    #[structopt(
        long,
        default_value = "10",
        help = "Attempts before giving up on contradicting rules"
    )]
    retries: usize,

    #[structopt(long, possible_values = &Shell::variants(), case_insensitive = true, help = "Generate shell completions and exit")]
    pub completions: Option<Shell>,
}

impl Opt {
    pub fn to_app_config(self) -> Result<AppConfig, &'static str> {
        if self.retries == 0 {
            Err("Retries must be at least 1")?
        }

        Ok(AppConfig {
            generation: Config::new(self.size, self.rules.unwrap_or_else(RuleSet::terrain)),
            seed: self.seed,
            attempts: self.retries,
            renderer: TerminalConfig {
                animate: !self.no_animate,
                delay: Duration::from_millis(self.delay),
                colored: !self.plain,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rules() {
        let json = r#"{
            "mountain": ["mountain", "forest"],
            "forest": ["mountain", "forest", "plains"],
            "plains": ["forest", "plains", "desert"],
            "desert": ["plains", "desert"]
        }"#;

        assert_eq!(parse_rules(json.as_bytes()), Ok(RuleSet::terrain()));
    }

    #[test]
    fn test_parse_rules_rejects_dangling_terrain() {
        let json = r#"{ "mountain": ["mountain", "desert"] }"#;

        assert!(parse_rules(json.as_bytes()).is_err());
    }

    #[test]
    fn test_parse_rules_rejects_unknown_terrain() {
        let json = r#"{ "swamp": ["swamp"] }"#;

        assert!(parse_rules(json.as_bytes()).is_err());
    }

    #[test]
    fn test_opt_to_app_config() {
        let opt = Opt::from_iter(&["terrain-collapse", "--size", "4", "--seed", "9", "--plain", "--no-animate"]);
        let config = opt.to_app_config().unwrap();

        assert_eq!(config.generation.size, 4);
        assert_eq!(config.generation.rules, RuleSet::terrain());
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.attempts, 10);
        assert!(!config.renderer.animate);
        assert!(!config.renderer.colored);
    }

    #[test]
    fn test_opt_rejects_zero_retries() {
        let opt = Opt::from_iter(&["terrain-collapse", "--retries", "0"]);

        assert!(opt.to_app_config().is_err());
    }
}
