//! Plain-text save format.
//!
//! One `KEY: value` line per field:
//!
//! ```text
//! NAME: Aria
//! CLASS: Warrior
//! LEVEL: 3
//! HEALTH: 140
//! MAX_HEALTH: 140
//! STRENGTH: 19
//! MAGIC: 9
//! EXPERIENCE: 40
//! GOLD: 230
//! INVENTORY: health_potion,health_potion
//! ACTIVE_QUESTS: goblin_camp
//! COMPLETED_QUESTS: first_steps
//! EQUIPPED_WEAPON: iron_sword=strength:5
//! EQUIPPED_ARMOR:
//! ```
//!
//! List fields are comma separated. Equipment slots store the effect that was
//! actually applied so unequipping after a reload reverts it exactly. Saves
//! without the `EQUIPPED_*` lines load with nothing equipped.

use chronicles_content::loaders::blocks::{Block, parse_blocks, write_block};
use chronicles_core::{
    Character, CharacterClass, EquippedItem, GameConfig, Inventory, ItemId, QuestId, StatEffect,
};

use super::{RepositoryError, Result};

/// Render a character in the save format.
///
/// # Errors
///
/// `InvalidSaveData` if the record fails [`Character::validate`]. Names and
/// ids that would not read back unchanged are rejected there.
pub fn encode(character: &Character) -> Result<String> {
    character
        .validate()
        .map_err(|e| RepositoryError::invalid(e.to_string()))?;

    let mut out = String::new();
    write_block(
        &mut out,
        &[
            ("NAME", character.name.clone()),
            ("CLASS", character.class.to_string()),
            ("LEVEL", character.level.to_string()),
            ("HEALTH", character.health.to_string()),
            ("MAX_HEALTH", character.max_health.to_string()),
            ("STRENGTH", character.strength.to_string()),
            ("MAGIC", character.magic.to_string()),
            ("EXPERIENCE", character.experience.to_string()),
            ("GOLD", character.gold.to_string()),
            ("INVENTORY", join(character.inventory.iter().map(ItemId::as_str))),
            ("ACTIVE_QUESTS", join(character.active_quests.iter().map(QuestId::as_str))),
            (
                "COMPLETED_QUESTS",
                join(character.completed_quests.iter().map(QuestId::as_str)),
            ),
            ("EQUIPPED_WEAPON", equipped_to_string(character.equipment.weapon.as_ref())),
            ("EQUIPPED_ARMOR", equipped_to_string(character.equipment.armor.as_ref())),
        ],
    );
    Ok(out)
}

/// Parse a save file.
///
/// # Errors
///
/// `InvalidSaveData` for a malformed line, a missing key, a bad number, an
/// unknown class, an overfull inventory, or a record that fails
/// [`Character::validate`].
pub fn decode(content: &str) -> Result<Character> {
    let blocks = parse_blocks(content).map_err(|e| RepositoryError::invalid(e.to_string()))?;
    let [block] = blocks.as_slice() else {
        return Err(RepositoryError::invalid(format!(
            "expected one character record, found {}",
            blocks.len()
        )));
    };

    let class = CharacterClass::parse(require(block, "CLASS")?)
        .map_err(|e| RepositoryError::invalid(e.to_string()))?;

    let inventory = Inventory::from_items(split_list(require(block, "INVENTORY")?).map(ItemId::new))
        .ok_or_else(|| {
            RepositoryError::invalid(format!(
                "inventory holds more than {} items",
                GameConfig::MAX_INVENTORY_SIZE
            ))
        })?;

    let mut character = Character::new(require(block, "NAME")?, class);
    character.level = number(block, "LEVEL")?;
    character.health = number(block, "HEALTH")?;
    character.max_health = number(block, "MAX_HEALTH")?;
    character.strength = number(block, "STRENGTH")?;
    character.magic = number(block, "MAGIC")?;
    character.experience = number(block, "EXPERIENCE")?;
    character.gold = number(block, "GOLD")?;
    character.inventory = inventory;
    character.active_quests = split_list(require(block, "ACTIVE_QUESTS")?)
        .map(QuestId::new)
        .collect();
    character.completed_quests = split_list(require(block, "COMPLETED_QUESTS")?)
        .map(QuestId::new)
        .collect();
    character.equipment.weapon = equipped(block, "EQUIPPED_WEAPON")?;
    character.equipment.armor = equipped(block, "EQUIPPED_ARMOR")?;

    character
        .validate()
        .map_err(|e| RepositoryError::invalid(e.to_string()))?;
    Ok(character)
}

fn require<'b>(block: &'b Block, key: &str) -> Result<&'b str> {
    block
        .require(key)
        .map_err(|e| RepositoryError::invalid(e.to_string()))
}

fn number(block: &Block, key: &str) -> Result<u32> {
    block
        .parse(key)
        .map_err(|e| RepositoryError::invalid(e.to_string()))
}

fn equipped(block: &Block, key: &str) -> Result<Option<EquippedItem>> {
    let raw = block.get_or_empty(key);
    if raw.is_empty() {
        return Ok(None);
    }

    let (item_id, effect) = raw
        .split_once('=')
        .ok_or_else(|| RepositoryError::invalid(format!("{key} must be 'item_id=stat:value'")))?;
    let effect = effect
        .parse::<StatEffect>()
        .map_err(|e| RepositoryError::invalid(format!("{key}: {e}")))?;

    Ok(Some(EquippedItem::new(ItemId::new(item_id.trim()), effect)))
}

fn equipped_to_string(item: Option<&EquippedItem>) -> String {
    item.map(|item| format!("{}={}", item.item_id, item.effect))
        .unwrap_or_default()
}

fn split_list(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(',').map(str::trim).filter(|s| !s.is_empty())
}

fn join<'a>(ids: impl Iterator<Item = &'a str>) -> String {
    ids.collect::<Vec<_>>().join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chronicles_core::StatKind;

    fn veteran() -> Character {
        let mut character = Character::new("Aria", CharacterClass::Warrior);
        character.level = 3;
        character.experience = 40;
        character.gold = 230;
        character.strength = 24;
        character
            .inventory
            .push(ItemId::new("health_potion"))
            .unwrap();
        character
            .inventory
            .push(ItemId::new("health_potion"))
            .unwrap();
        character.active_quests.insert(QuestId::new("goblin_camp"));
        character.completed_quests.insert(QuestId::new("first_steps"));
        character.equipment.weapon = Some(EquippedItem::new(
            ItemId::new("iron_sword"),
            StatEffect::new(StatKind::Strength, 5),
        ));
        character
    }

    #[test]
    fn save_format_round_trips() {
        let character = veteran();
        let decoded = decode(&encode(&character).unwrap()).unwrap();
        assert_eq!(decoded, character);
    }

    #[test]
    fn encode_writes_expected_lines() {
        let text = encode(&veteran()).unwrap();
        assert!(text.contains("NAME: Aria\n"));
        assert!(text.contains("CLASS: Warrior\n"));
        assert!(text.contains("INVENTORY: health_potion,health_potion\n"));
        assert!(text.contains("EQUIPPED_WEAPON: iron_sword=strength:5\n"));
        assert!(text.contains("EQUIPPED_ARMOR: \n"));
    }

    #[test]
    fn missing_equipment_lines_mean_nothing_equipped() {
        let text: String = encode(&Character::new("Bo", CharacterClass::Mage))
            .unwrap()
            .lines()
            .filter(|line| !line.starts_with("EQUIPPED_"))
            .map(|line| format!("{line}\n"))
            .collect();
        let character = decode(&text).unwrap();
        assert_eq!(character.equipment.weapon, None);
        assert_eq!(character.equipment.armor, None);
    }

    #[test]
    fn rejects_bad_numbers_and_classes() {
        let text = encode(&veteran()).unwrap();

        let bad_level = text.replace("LEVEL: 3", "LEVEL: three");
        assert!(matches!(
            decode(&bad_level),
            Err(RepositoryError::InvalidSaveData(_))
        ));

        let bad_class = text.replace("CLASS: Warrior", "CLASS: Bard");
        assert!(matches!(
            decode(&bad_class),
            Err(RepositoryError::InvalidSaveData(_))
        ));
    }

    #[test]
    fn rejects_missing_keys_and_malformed_lines() {
        let text = encode(&veteran()).unwrap();

        let missing_gold = text.replace("GOLD: 230\n", "");
        assert!(matches!(
            decode(&missing_gold),
            Err(RepositoryError::InvalidSaveData(_))
        ));

        let malformed = text.replace("GOLD: 230", "GOLD 230");
        assert!(matches!(
            decode(&malformed),
            Err(RepositoryError::InvalidSaveData(_))
        ));
    }

    #[test]
    fn rejects_records_that_fail_validation() {
        let text = encode(&veteran()).unwrap().replace("\nHEALTH: 120\n", "\nHEALTH: 999\n");
        assert!(matches!(
            decode(&text),
            Err(RepositoryError::InvalidSaveData(_))
        ));
    }

    #[test]
    fn rejects_overfull_inventory() {
        let items = vec!["rock"; GameConfig::MAX_INVENTORY_SIZE + 1].join(",");
        let text = encode(&veteran()).unwrap().replace(
            "INVENTORY: health_potion,health_potion",
            &format!("INVENTORY: {items}"),
        );
        assert!(matches!(
            decode(&text),
            Err(RepositoryError::InvalidSaveData(_))
        ));
    }

    #[test]
    fn rejects_malformed_equipment() {
        let text = encode(&veteran()).unwrap().replace("iron_sword=strength:5", "iron_sword");
        assert!(matches!(
            decode(&text),
            Err(RepositoryError::InvalidSaveData(_))
        ));
    }

    #[test]
    fn refuses_to_write_what_would_read_back_differently() {
        let padded = Character::new(" Aria ", CharacterClass::Warrior);
        let injected = Character::new("Ar\nLEVEL: 99", CharacterClass::Warrior);
        let mut split_quest = veteran();
        split_quest.active_quests.insert(QuestId::new("a,b"));
        let mut split_weapon = veteran();
        split_weapon.equipment.weapon = Some(EquippedItem::new(
            ItemId::new("sword=blunt"),
            StatEffect::new(StatKind::Strength, 1),
        ));

        for character in [padded, injected, split_quest, split_weapon] {
            assert!(
                matches!(encode(&character), Err(RepositoryError::InvalidSaveData(_))),
                "{:?} should not be written",
                character.name
            );
        }
    }

    #[test]
    fn decoded_records_keep_their_ids() {
        let mut character = veteran();
        character.active_quests.insert(QuestId::new("orc warband"));
        character.inventory.push(ItemId::new("Iron Sword")).unwrap();

        let decoded = decode(&encode(&character).unwrap()).unwrap();
        assert!(decoded.is_quest_active(&QuestId::new("orc warband")));
        assert_eq!(decoded, character);
    }
}
