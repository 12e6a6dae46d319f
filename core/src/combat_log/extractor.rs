use super::*;
use memchr::memchr;
use memchr::memmem::Finder;
use meter_types::{AppConfig, TruncationMode};


/// Pulls `(actor, ability, amount)` out of damage sentences such as
/// `"Bob dealt 120 damage to Orc with Fireball."`.
///
/// This is a substring heuristic rather than a grammar: matching is
/// case-sensitive and nothing is trimmed.
pub struct EventExtractor {
    dealt: Finder<'static>,
    damage: Finder<'static>,
    actor_end: Finder<'static>,
    ability_start: Finder<'static>,
    max_name_len: usize,
    truncation: TruncationMode,
}

impl Default for EventExtractor {
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}

impl EventExtractor {
    pub fn new(max_name_len: usize, truncation: TruncationMode) -> Self {
        Self {
            dealt: Finder::new("dealt"),
            damage: Finder::new("damage"),
            actor_end: Finder::new(" dealt"),
            ability_start: Finder::new("with "),
            max_name_len,
            truncation,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.max_name_len, config.truncation)
    }

    /// Returns `Ok(None)` for messages that are not damage events. A message
    /// that passes the filter always yields an event, with `"Unknown"` / `0`
    /// standing in for anything missing.
    pub fn extract(&self, message: &str) -> Result<Option<DamageEvent>, ExtractError> {
        if !self.is_candidate(message) {
            return Ok(None);
        }

        let actor = self.limit_name(NameField::Actor, self.parse_actor(message))?;
        let ability = self.limit_name(NameField::Ability, self.parse_ability(message))?;
        let amount = parse_amount(message);

        Ok(Some(DamageEvent {
            actor,
            ability,
            amount,
        }))
    }

    pub fn is_candidate(&self, message: &str) -> bool {
        let b = message.as_bytes();
        self.dealt.find(b).is_some() && self.damage.find(b).is_some()
    }

    // everything before the first " dealt"
    fn parse_actor<'a>(&self, message: &'a str) -> &'a str {
        match self.actor_end.find(message.as_bytes()) {
            Some(pos) => &message[..pos],
            None => UNKNOWN,
        }
    }

    // everything after the first "with " up to the next '.'
    fn parse_ability<'a>(&self, message: &'a str) -> &'a str {
        let Some(pos) = self.ability_start.find(message.as_bytes()) else {
            return UNKNOWN;
        };
        let rest = &message[pos + "with ".len()..];
        match memchr(b'.', rest.as_bytes()) {
            Some(end) => &rest[..end],
            None => rest,
        }
    }

    fn limit_name(&self, field: NameField, name: &str) -> Result<String, ExtractError> {
        let Some((cut, _)) = name.char_indices().nth(self.max_name_len) else {
            return Ok(name.to_string());
        };

        match self.truncation {
            TruncationMode::Truncate => Ok(name[..cut].to_string()),
            TruncationMode::Reject => Err(ExtractError::NameTooLong {
                field,
                len: name.chars().count(),
                max: self.max_name_len,
            }),
        }
    }
}

/// Decimal value of the first run of ASCII digits, 0 when there is none.
/// Saturates instead of overflowing.
pub(crate) fn parse_amount(message: &str) -> u64 {
    let bytes = message.as_bytes();
    let Some(start) = bytes.iter().position(u8::is_ascii_digit) else {
        return 0;
    };

    bytes[start..]
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .fold(0u64, |acc, b| {
            acc.saturating_mul(10).saturating_add(u64::from(b - b'0'))
        })
}
