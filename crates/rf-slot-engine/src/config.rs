//! Game configuration: reels, paylines and paytables
//!
//! A `GameConfig` is validated when it is built and immutable afterwards.
//! Every way of obtaining one (code, JSON, YAML, file) goes through the same
//! checks, so a spin never meets a malformed payline or reel.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, SlotError, SlotResult};
use crate::paytable::{MIN_WIN_COUNT, PAYLINE_LENGTH, PayTable, Payline, WildPayTable};
use crate::symbols::{Reel, Symbol, SymbolKind};

/// Number of reels
pub const REEL_COUNT: usize = PAYLINE_LENGTH;

/// Number of paylines evaluated per spin
pub const PAYLINE_COUNT: usize = 20;

/// Complete, validated game definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawGameConfig")]
pub struct GameConfig {
    paylines: Vec<Payline>,
    reels: [Reel; REEL_COUNT],
    paytable: PayTable,
    wild_paytable: WildPayTable,
}

/// Unvalidated mirror of the config file layout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawGameConfig {
    pub paylines: Vec<Vec<u8>>,
    pub reels: Vec<Vec<Symbol>>,
    #[serde(default)]
    pub paytable: PayTable,
    #[serde(default)]
    pub wild_paytable: WildPayTable,
}

impl GameConfig {
    /// Build and validate a configuration
    pub fn new(
        reels: Vec<Reel>,
        paylines: Vec<Payline>,
        paytable: PayTable,
        wild_paytable: WildPayTable,
    ) -> Result<Self, ConfigError> {
        let reels: [Reel; REEL_COUNT] = reels.try_into().map_err(|reels: Vec<Reel>| {
            ConfigError::ReelCount {
                expected: REEL_COUNT,
                found: reels.len(),
            }
        })?;

        if paylines.len() != PAYLINE_COUNT {
            return Err(ConfigError::PaylineCount {
                expected: PAYLINE_COUNT,
                found: paylines.len(),
            });
        }

        let kinds = symbol_kinds(&reels)?;
        validate_paytable(&paytable, &kinds)?;
        validate_wild_paytable(&wild_paytable, &kinds)?;

        Ok(Self {
            paylines,
            reels,
            paytable,
            wild_paytable,
        })
    }

    /// The shipped 5×3, 20-line game
    pub fn standard() -> Self {
        let reels =
            STANDARD_REELS.map(|strip| Reel::from_strip(strip.map(standard_symbol).to_vec()));

        let paytable = STANDARD_PAYS
            .iter()
            .fold(PayTable::new(), |table, &(name, pays)| table.with_symbol(name, pays));

        let wild_paytable = WildPayTable::new().with_wild("w1", 2.0).with_wild("w2", 3.0);

        Self {
            paylines: crate::paytable::standard_20_paylines(),
            reels,
            paytable,
            wild_paytable,
        }
    }

    /// Parse and validate a JSON document
    pub fn from_json_str(json: &str) -> SlotResult<Self> {
        let raw: RawGameConfig = serde_json::from_str(json)?;
        Ok(Self::try_from(raw)?)
    }

    /// Parse and validate a YAML document
    pub fn from_yaml_str(yaml: &str) -> SlotResult<Self> {
        let raw: RawGameConfig = serde_yml::from_str(yaml)?;
        Ok(Self::try_from(raw)?)
    }

    /// Load a config file; the format follows the extension
    pub fn load(path: impl AsRef<Path>) -> SlotResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;

        let config = match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json_str(&text)?,
            Some("yaml") | Some("yml") => Self::from_yaml_str(&text)?,
            other => {
                return Err(SlotError::UnsupportedFormat(
                    other.unwrap_or("<none>").to_string(),
                ));
            }
        };

        log::info!(
            "Loaded game config from {}: {} reels, {} paylines, {} paying symbols",
            path.display(),
            config.reels.len(),
            config.paylines.len(),
            config.paytable.len()
        );

        Ok(config)
    }

    /// Export as pretty JSON
    pub fn to_json_pretty(&self) -> SlotResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Paytable multiplier for `count` of a kind, 0 if undefined
    #[inline]
    pub fn multiplier_for(&self, name: &str, count: usize) -> f64 {
        self.paytable.multiplier_for(name, count)
    }

    /// Wild multiplier, 0 if undefined
    #[inline]
    pub fn wild_multiplier_for(&self, name: &str) -> f64 {
        self.wild_paytable.wild_multiplier_for(name)
    }

    /// The five reel strips, left to right
    pub fn reels(&self) -> &[Reel; REEL_COUNT] {
        &self.reels
    }

    pub fn paylines(&self) -> &[Payline] {
        &self.paylines
    }

    pub fn paytable(&self) -> &PayTable {
        &self.paytable
    }

    pub fn wild_paytable(&self) -> &WildPayTable {
        &self.wild_paytable
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::standard()
    }
}

impl TryFrom<RawGameConfig> for GameConfig {
    type Error = ConfigError;

    fn try_from(raw: RawGameConfig) -> Result<Self, Self::Error> {
        let reels = raw
            .reels
            .into_iter()
            .enumerate()
            .map(|(i, symbols)| Reel::new(i, symbols))
            .collect::<Result<Vec<_>, _>>()?;

        let paylines = raw
            .paylines
            .iter()
            .enumerate()
            .map(|(i, rows)| Payline::new(i, rows))
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(reels, paylines, raw.paytable, raw.wild_paytable)
    }
}

impl From<GameConfig> for RawGameConfig {
    fn from(config: GameConfig) -> Self {
        Self {
            paylines: config.paylines.iter().map(|p| p.rows().to_vec()).collect(),
            reels: config
                .reels
                .into_iter()
                .map(|r| r.symbols().to_vec())
                .collect(),
            paytable: config.paytable,
            wild_paytable: config.wild_paytable,
        }
    }
}

/// Kind of every symbol name; a name must keep its kind on every reel
fn symbol_kinds(reels: &[Reel]) -> Result<HashMap<&str, SymbolKind>, ConfigError> {
    let mut kinds = HashMap::new();

    for symbol in reels.iter().flat_map(|r| r.symbols()) {
        match kinds.insert(symbol.name.as_str(), symbol.kind) {
            Some(previous) if previous != symbol.kind => {
                return Err(ConfigError::ConflictingSymbolKind {
                    name: symbol.name.clone(),
                    first: previous,
                    second: symbol.kind,
                });
            }
            _ => {}
        }
    }

    Ok(kinds)
}

fn validate_paytable(
    paytable: &PayTable,
    kinds: &HashMap<&str, SymbolKind>,
) -> Result<(), ConfigError> {
    for (name, row) in paytable.rows() {
        if kinds.get(name) == Some(&SymbolKind::Wild) {
            return Err(ConfigError::PaytableWild(name.to_string()));
        }

        for (&count, &value) in row {
            if !(MIN_WIN_COUNT..=PAYLINE_LENGTH).contains(&(count as usize)) {
                return Err(ConfigError::PaytableCount {
                    name: name.to_string(),
                    count,
                });
            }
            check_multiplier(name, value)?;
        }
    }

    Ok(())
}

fn validate_wild_paytable(
    wild_paytable: &WildPayTable,
    kinds: &HashMap<&str, SymbolKind>,
) -> Result<(), ConfigError> {
    for (name, value) in wild_paytable.entries() {
        if kinds.get(name) == Some(&SymbolKind::Normal) {
            return Err(ConfigError::WildPaytableNormal(name.to_string()));
        }
        check_multiplier(name, value)?;
    }

    Ok(())
}

fn check_multiplier(name: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidMultiplier {
            name: name.to_string(),
            value,
        })
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// STANDARD GAME DATA
// ═══════════════════════════════════════════════════════════════════════════

const STANDARD_REELS: [[&str; 13]; REEL_COUNT] = [
    ["w2", "s7", "s3", "s10", "w1", "s1", "s9", "s4", "s11", "s6", "s8", "s2", "s5"],
    ["s5", "s11", "w1", "s8", "s2", "s9", "s3", "w2", "s7", "s10", "s4", "s1", "s6"],
    ["s9", "s4", "s1", "s6", "s3", "w2", "s11", "s5", "w1", "s10", "s2", "s7", "s8"],
    ["s10", "s2", "s7", "w1", "s5", "s6", "s1", "s8", "s3", "w2", "s9", "s11", "s4"],
    ["s6", "s3", "w2", "s9", "s11", "s4", "s7", "s1", "s2", "s10", "w1", "s8", "s5"],
];

const STANDARD_PAYS: [(&str, [f64; 3]); 11] = [
    ("s1", [2.5, 7.5, 37.5]),
    ("s2", [1.75, 5.0, 25.0]),
    ("s3", [1.25, 3.0, 15.0]),
    ("s4", [1.0, 2.0, 10.0]),
    ("s5", [0.6, 1.25, 7.5]),
    ("s6", [0.4, 1.0, 5.0]),
    ("s7", [0.25, 0.5, 2.5]),
    ("s8", [0.25, 0.5, 2.5]),
    ("s9", [0.1, 0.25, 1.25]),
    ("s10", [0.1, 0.25, 1.25]),
    ("s11", [0.1, 0.25, 1.25]),
];

fn standard_symbol(name: &str) -> Symbol {
    if name.starts_with('w') {
        Symbol::wild(name)
    } else {
        Symbol::normal(name)
    }
}
