//! Game session: one character played against one content registry.
//!
//! [`GameSession`] owns the character, the loaded content and a repository,
//! and routes every request through the `chronicles-core` rules. Rules errors
//! are raised before anything changes, so a failed call leaves the session as
//! it was.

use chronicles_content::ContentFactory;
use chronicles_core::combat::{Battle, BattleEnv, BattleOutcome, Enemy, PlayerAction};
use chronicles_core::items::{self, EquipChange};
use chronicles_core::quest::{self, AcceptOutcome, QuestCompletion};
use chronicles_core::{
    Character, ContentSnapshot, EquipSlot, GameConfig, ItemDefinition, ItemId, ItemKind,
    ItemOracle, PcgRng, QuestDefinition, QuestId, StatEffect,
};

use crate::config::RuntimeConfig;
use crate::error::{Result, SessionError};
use crate::repository::{CharacterRepository, FileCharacterRepository};

/// Summary of one finished battle.
#[derive(Clone, Debug, PartialEq)]
pub struct BattleReport {
    pub outcome: BattleOutcome,
    /// Levels gained from the victory rewards.
    pub levels_gained: u32,
    /// Number of individual actions taken.
    pub turns: u32,
    /// Seed the battle's rolls were derived from; replaying with it reproduces
    /// the battle.
    pub seed: u64,
    pub messages: Vec<String>,
}

pub struct GameSession<R: CharacterRepository = FileCharacterRepository> {
    character: Character,
    content: ContentSnapshot,
    config: GameConfig,
    repository: R,
    rng: PcgRng,
    battle_seed: Option<u64>,
    battles: u64,
}

impl GameSession<FileCharacterRepository> {
    /// Create a new character and persist it under `config.save_dir`.
    ///
    /// Default content files are written to `config.data_dir` when missing.
    pub fn start(config: &RuntimeConfig, name: &str, class: &str) -> Result<Self> {
        let (content, game_config) = load_content(config)?;
        let repository = FileCharacterRepository::new(&config.save_dir)?;

        let character = Character::create(name, class)?;
        character.validate()?;

        let session = Self::new(character, content, game_config, repository)
            .with_battle_seed(config.battle_seed);
        session.save()?;

        tracing::info!(
            "Created {} the {} in {}",
            session.character.name,
            session.character.class,
            config.save_dir.display()
        );
        Ok(session)
    }

    /// Load a saved character from `config.save_dir`.
    pub fn resume(config: &RuntimeConfig, name: &str) -> Result<Self> {
        let (content, game_config) = load_content(config)?;
        let repository = FileCharacterRepository::new(&config.save_dir)?;
        let character = repository.load(name)?;

        tracing::info!(
            "Resumed {} (level {}, {} gold)",
            character.name,
            character.level,
            character.gold
        );
        Ok(Self::new(character, content, game_config, repository)
            .with_battle_seed(config.battle_seed))
    }
}

impl<R: CharacterRepository> GameSession<R> {
    pub fn new(
        character: Character,
        content: ContentSnapshot,
        config: GameConfig,
        repository: R,
    ) -> Self {
        Self {
            character,
            content,
            config,
            repository,
            rng: PcgRng,
            battle_seed: None,
            battles: 0,
        }
    }

    /// Fix the seed of the next battle. Later battles use consecutive seeds.
    pub fn with_battle_seed(mut self, seed: Option<u64>) -> Self {
        self.battle_seed = seed;
        self
    }

    pub fn character(&self) -> &Character {
        &self.character
    }

    pub fn content(&self) -> &ContentSnapshot {
        &self.content
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    // ===== persistence =====

    pub fn save(&self) -> Result<()> {
        self.repository.save(&self.character)?;
        tracing::info!("Saved {}", self.character.name);
        Ok(())
    }

    // ===== combat =====

    /// Fight an enemy by type name (`goblin`, `orc`, `dragon`) with basic
    /// attacks until one side falls.
    pub fn fight(&mut self, enemy_type: &str) -> Result<BattleReport> {
        let enemy = Enemy::from_type(enemy_type)?;
        self.fight_enemy(enemy, |_| PlayerAction::Attack)
    }

    /// Fight an enemy scaled to the character's level with basic attacks.
    pub fn fight_random(&mut self) -> Result<BattleReport> {
        let enemy = Enemy::for_level(self.character.level);
        self.fight_enemy(enemy, |_| PlayerAction::Attack)
    }

    /// Fight `enemy`, asking `choose` for the character's action each round.
    ///
    /// Victory rewards are granted to the character before returning.
    pub fn fight_enemy(
        &mut self,
        enemy: Enemy,
        mut choose: impl FnMut(&Battle<'_>) -> PlayerAction,
    ) -> Result<BattleReport> {
        let seed = self.next_battle_seed();
        let enemy_name = enemy.name.clone();
        let env = BattleEnv::new(&self.rng, &self.config, seed);

        let mut battle = Battle::new(&mut self.character, enemy, env)?;
        let outcome = loop {
            let action = choose(&battle);
            if let Some(outcome) = battle.play_round(action)? {
                break outcome;
            }
        };
        let turns = battle.turn();
        let mut messages: Vec<String> = battle.log().messages().collect();
        drop(battle);

        let levels_gained = match outcome {
            BattleOutcome::Victory { rewards } => self.character.grant_rewards(rewards)?,
            BattleOutcome::Defeat | BattleOutcome::Escaped => 0,
        };
        if levels_gained > 0 {
            messages.push(format!("Level up! Now level {}.", self.character.level));
        }

        tracing::info!(
            "{} vs {}: {:?} after {} turns (seed {})",
            self.character.name,
            enemy_name,
            outcome,
            turns,
            seed
        );

        Ok(BattleReport {
            outcome,
            levels_gained,
            turns,
            seed,
            messages,
        })
    }

    /// Bring a dead character back at half health. Returns false if the
    /// character was alive.
    pub fn revive(&mut self) -> bool {
        let revived = self.character.revive();
        if revived {
            tracing::info!("{} revived with {} HP", self.character.name, self.character.health);
        }
        revived
    }

    fn next_battle_seed(&mut self) -> u64 {
        let seed = match self.battle_seed {
            Some(base) => base.wrapping_add(self.battles),
            None => rand::random(),
        };
        self.battles += 1;
        seed
    }

    // ===== quests =====

    pub fn accept_quest(&mut self, quest_id: &str) -> Result<AcceptOutcome> {
        let quest_id = QuestId::new(quest_id);
        let outcome = quest::accept(&mut self.character, &quest_id, &self.content)?;
        tracing::info!("{} quest {}: {:?}", self.character.name, quest_id, outcome);
        Ok(outcome)
    }

    pub fn complete_quest(&mut self, quest_id: &str) -> Result<QuestCompletion> {
        let quest_id = QuestId::new(quest_id);
        let completion = quest::complete(&mut self.character, &quest_id, &self.content)?;
        tracing::info!(
            "{} completed {}: +{} XP, +{} gold",
            self.character.name,
            quest_id,
            completion.rewards.xp,
            completion.rewards.gold
        );
        Ok(completion)
    }

    pub fn abandon_quest(&mut self, quest_id: &str) -> Result<()> {
        let quest_id = QuestId::new(quest_id);
        quest::abandon(&mut self.character, &quest_id)?;
        tracing::info!("{} abandoned {}", self.character.name, quest_id);
        Ok(())
    }

    pub fn active_quests(&self) -> Vec<&QuestDefinition> {
        quest::active_quests(&self.character, &self.content)
    }

    pub fn available_quests(&self) -> Vec<&QuestDefinition> {
        quest::available_quests(&self.character, &self.content)
    }

    /// Percentage of the registry's quests the character has completed.
    pub fn completion_percentage(&self) -> f64 {
        quest::completion_percentage(&self.character, &self.content)
    }

    // ===== items =====

    /// Shop items, ordered by identifier.
    pub fn shop(&self) -> Vec<&ItemDefinition> {
        self.content.all_items()
    }

    pub fn buy(&mut self, item_id: &str) -> Result<()> {
        let item = lookup_item(&self.content, item_id)?;
        items::purchase_item(&mut self.character, item)?;
        tracing::info!("{} bought {} for {} gold", self.character.name, item.name, item.cost);
        Ok(())
    }

    /// Sell one copy of an item. Returns the gold received.
    pub fn sell(&mut self, item_id: &str) -> Result<u32> {
        let item = lookup_item(&self.content, item_id)?;
        let price = items::sell_item(&mut self.character, item)?;
        tracing::info!("{} sold {} for {} gold", self.character.name, item.name, price);
        Ok(price)
    }

    /// Use a consumable. Returns the change actually applied.
    pub fn use_item(&mut self, item_id: &str) -> Result<StatEffect> {
        let item = lookup_item(&self.content, item_id)?;
        let applied = items::use_item(&mut self.character, item)?;
        tracing::debug!("{} used {}: {}", self.character.name, item.name, applied);
        Ok(applied)
    }

    /// Equip a weapon or armor into its slot, returning any replaced item to
    /// the inventory.
    pub fn equip(&mut self, item_id: &str) -> Result<EquipChange> {
        let item = lookup_item(&self.content, item_id)?;
        let change = match item.kind {
            ItemKind::Armor => items::equip_armor(&mut self.character, item)?,
            ItemKind::Weapon | ItemKind::Consumable => {
                items::equip_weapon(&mut self.character, item)?
            }
        };
        tracing::debug!("{} equipped {}", self.character.name, item.name);
        Ok(change)
    }

    pub fn unequip(&mut self, slot: EquipSlot) -> Result<Option<ItemId>> {
        let removed = items::unequip(&mut self.character, slot)?;
        if let Some(item_id) = &removed {
            tracing::debug!("{} unequipped {} from {}", self.character.name, item_id, slot);
        }
        Ok(removed)
    }
}

fn load_content(config: &RuntimeConfig) -> Result<(ContentSnapshot, GameConfig)> {
    let factory = ContentFactory::new(&config.data_dir);
    factory.write_defaults().map_err(SessionError::Content)?;

    let content = factory.load_snapshot().map_err(SessionError::Content)?;
    let game_config = factory.load_config().map_err(SessionError::Content)?;
    Ok((content, game_config))
}

fn lookup_item<'c>(content: &'c ContentSnapshot, item_id: &str) -> Result<&'c ItemDefinition> {
    let item_id = ItemId::new(item_id);
    content
        .item(&item_id)
        .ok_or(SessionError::UnknownItem(item_id))
}
