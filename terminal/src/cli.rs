//! # cli — แยก command + flags จาก argv

use anyhow::{anyhow, bail, Context};
use ge_nexus::engine::skill::Skill;

pub const HELP: &str = "\
nexus-terminal — GE Nexus command-line client

USAGE:
    nexus-terminal <COMMAND> [FLAGS]

COMMANDS:
    health                       Server status
    categories                   List catalogue categories
    items                        Browse the catalogue (--alpha, --page, --search)
    item <id>                    Item detail with price history summary
    flip                         Flip opportunities
    herblore                     Unfinished potion profits
    skill <name>                 smithing | fletching | runecrafting | cooking | crafting
    fav [list|add|remove|toggle] [id]
    settings [show | set <key> <value>]

FLAGS:
    --min-volume <n>   --tax-rate <r>   --top <n>   --filter-by <volume|limit>
    --batch <n>        --search <text>  --sort <key> --asc   --csv
    --alpha <letter>   --page <n>
";

#[derive(Debug, Clone, PartialEq)]
pub enum FavAction {
    List,
    Add(u32),
    Remove(u32),
    Toggle(u32),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Health,
    Categories,
    Items,
    Item(u32),
    Flip,
    Herblore,
    Skill(Skill),
    Favorites(FavAction),
    ShowSettings,
    SetSetting { key: String, value: String },
    Help,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Flags {
    /// `(setting key, raw value)` pairs applied on top of saved settings
    pub overrides: Vec<(String, String)>,
    pub search:    Option<String>,
    pub sort:      Option<String>,
    pub asc:       bool,
    pub csv:       bool,
    pub alpha:     String,
    pub page:      u32,
}

impl Default for Flags {
    fn default() -> Self {
        Self {
            overrides: Vec::new(),
            search:    None,
            sort:      None,
            asc:       false,
            csv:       false,
            alpha:     "a".to_string(),
            page:      1,
        }
    }
}

pub fn parse<I>(args: I) -> anyhow::Result<(Command, Flags)>
where
    I: IntoIterator<Item = String>,
{
    let mut flags = Flags::default();
    let mut positional: Vec<String> = Vec::new();

    let mut args = args.into_iter();
    while let Some(a) = args.next() {
        let mut value = |name: &str| {
            args.next()
                .ok_or_else(|| anyhow!("Missing value for {name}"))
        };
        match a.as_str() {
            "--min-volume" => flags.overrides.push(("min-volume".into(), value("--min-volume")?)),
            "--tax-rate"   => flags.overrides.push(("tax-rate".into(), value("--tax-rate")?)),
            "--top"        => flags.overrides.push(("top".into(), value("--top")?)),
            "--filter-by"  => flags.overrides.push(("filter-by".into(), value("--filter-by")?)),
            "--batch"      => flags.overrides.push(("batch".into(), value("--batch")?)),
            "--search"     => flags.search = Some(value("--search")?),
            "--sort"       => flags.sort = Some(value("--sort")?.to_ascii_lowercase()),
            "--alpha"      => flags.alpha = value("--alpha")?,
            "--page"       => {
                flags.page = value("--page")?
                    .parse()
                    .context("--page must be a positive integer")?;
            }
            "--asc"        => flags.asc = true,
            "--csv"        => flags.csv = true,
            "-h" | "--help" => return Ok((Command::Help, flags)),
            other if other.starts_with("--") => bail!("Unknown flag: {other}"),
            _ => positional.push(a),
        }
    }

    let command = parse_command(&positional)?;
    Ok((command, flags))
}

fn parse_command(positional: &[String]) -> anyhow::Result<Command> {
    let words: Vec<&str> = positional.iter().map(String::as_str).collect();
    let command = match words.as_slice() {
        [] | ["help"] => Command::Help,
        ["health"] => Command::Health,
        ["categories"] => Command::Categories,
        ["items"] => Command::Items,
        ["item", id] => Command::Item(parse_id(id)?),
        ["flip"] => Command::Flip,
        ["herblore"] => Command::Herblore,
        ["skill", name] => Command::Skill(
            Skill::from_slug(name).ok_or_else(|| anyhow!("Unknown skill: '{name}'"))?,
        ),
        ["fav"] | ["fav", "list"] => Command::Favorites(FavAction::List),
        ["fav", "add", id] => Command::Favorites(FavAction::Add(parse_id(id)?)),
        ["fav", "remove", id] => Command::Favorites(FavAction::Remove(parse_id(id)?)),
        ["fav", "toggle", id] => Command::Favorites(FavAction::Toggle(parse_id(id)?)),
        ["settings"] | ["settings", "show"] => Command::ShowSettings,
        ["settings", "set", key, value] => Command::SetSetting {
            key:   key.to_string(),
            value: value.to_string(),
        },
        _ => bail!("Unrecognised command: '{}' (try --help)", words.join(" ")),
    };
    Ok(command)
}

fn parse_id(raw: &str) -> anyhow::Result<u32> {
    raw.parse()
        .with_context(|| format!("Item id must be a non-negative integer (got '{raw}')"))
}

// ─── Tests ────────────────────────────────────────────────────────────────────
