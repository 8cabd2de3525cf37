use core::fmt;
use core::str::FromStr;

use super::ContentError;
use crate::state::ItemId;

pub trait ItemOracle: Send + Sync {
    fn item(&self, id: &ItemId) -> Option<&ItemDefinition>;

    /// Returns every item definition, ordered by identifier.
    fn all_items(&self) -> Vec<&ItemDefinition>;
}

/// Item definition as supplied by the content registry.
///
/// Definitions are immutable for the registry's lifetime. The rules only ever
/// read them; characters refer to items by [`ItemId`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemDefinition {
    pub item_id: ItemId,
    pub name: String,
    pub kind: ItemKind,
    pub effect: StatEffect,
    pub cost: u32,
    pub description: String,
}

impl ItemDefinition {
    pub fn new(
        item_id: impl Into<ItemId>,
        name: impl Into<String>,
        kind: ItemKind,
        effect: StatEffect,
        cost: u32,
    ) -> Self {
        Self {
            item_id: item_id.into(),
            name: name.into(),
            kind,
            effect,
            cost,
            description: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Gold paid back when this item is sold: half the purchase cost, rounded down.
    pub fn sell_price(&self) -> u32 {
        self.cost / 2
    }
}

/// Item category. Decides which inventory operation accepts the item.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ItemKind {
    /// Equipped into the weapon slot.
    Weapon,
    /// Equipped into the armor slot.
    Armor,
    /// Used once and removed from the inventory.
    Consumable,
}

impl ItemKind {
    /// Parses an item type, mapping failures to a [`ContentError`].
    pub fn parse(raw: &str) -> Result<Self, ContentError> {
        raw.trim()
            .parse()
            .map_err(|_| ContentError::InvalidItemType(raw.to_owned()))
    }
}

/// Character stats an item effect is allowed to touch.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum StatKind {
    Health,
    MaxHealth,
    Strength,
    Magic,
}

/// A stat modification carried by an item, e.g. `strength:5` or `health:20`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatEffect {
    pub stat: StatKind,
    pub value: i32,
}

impl StatEffect {
    pub const fn new(stat: StatKind, value: i32) -> Self {
        Self { stat, value }
    }

    /// The effect that undoes this one.
    pub const fn inverse(self) -> Self {
        Self {
            stat: self.stat,
            value: -self.value,
        }
    }
}

impl FromStr for StatEffect {
    type Err = ContentError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let invalid = || ContentError::InvalidStatEffect(raw.to_owned());

        let (stat, value) = raw.split_once(':').ok_or_else(invalid)?;
        let stat = stat.trim().parse::<StatKind>().map_err(|_| invalid())?;
        let value = value.trim().parse::<i32>().map_err(|_| invalid())?;

        Ok(Self { stat, value })
    }
}

impl fmt::Display for StatEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.stat, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_stat_effects() {
        assert_eq!(
            "health:20".parse::<StatEffect>(),
            Ok(StatEffect::new(StatKind::Health, 20))
        );
        assert_eq!(
            " max_health : -5 ".parse::<StatEffect>(),
            Ok(StatEffect::new(StatKind::MaxHealth, -5))
        );
        assert_eq!(
            "Strength:3".parse::<StatEffect>(),
            Ok(StatEffect::new(StatKind::Strength, 3))
        );
    }

    #[test]
    fn rejects_stats_outside_the_enumeration() {
        assert_eq!(
            "luck:7".parse::<StatEffect>(),
            Err(ContentError::InvalidStatEffect("luck:7".into()))
        );
        assert!("strength".parse::<StatEffect>().is_err());
        assert!("strength:lots".parse::<StatEffect>().is_err());
    }

    #[test]
    fn effect_display_round_trips() {
        let effect = StatEffect::new(StatKind::MaxHealth, 10);
        assert_eq!(effect.to_string(), "max_health:10");
        assert_eq!(effect.to_string().parse::<StatEffect>(), Ok(effect));
    }

    #[test]
    fn item_kind_parse_is_case_insensitive() {
        assert_eq!(ItemKind::parse("Weapon"), Ok(ItemKind::Weapon));
        assert_eq!(ItemKind::parse(" consumable "), Ok(ItemKind::Consumable));
        assert_eq!(
            ItemKind::parse("trinket"),
            Err(ContentError::InvalidItemType("trinket".into()))
        );
    }

    #[test]
    fn sell_price_rounds_down() {
        let potion = ItemDefinition::new(
            "health_potion",
            "Health Potion",
            ItemKind::Consumable,
            StatEffect::new(StatKind::Health, 20),
            25,
        );
        assert_eq!(potion.sell_price(), 12);
    }
}
