//! # Entity Module
//!
//! The single entity type used for the player, monsters, items and corpses,
//! and the optional capabilities that give an entity its behavior.
//!
//! Capabilities are stored inline on the entity. Each one remembers the id of
//! the entity that owns it, never the entity itself.

use crate::config;
use crate::game::{new_entity_id, Ai, EntityId, Position};
use crate::rendering::palette;
use macroquad::color::Color;

/// What happens when a fighter's hit points run out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeathCallback {
    /// The game is over
    Player,
    /// The monster turns into remains
    Monster,
}

/// Combat capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fighter {
    /// Entity carrying this capability
    pub owner: EntityId,
    pub max_hp: i32,
    pub hp: i32,
    pub defense: i32,
    pub power: i32,
    /// Pending death transition; taken the first time hp drops to zero
    pub on_death: Option<DeathCallback>,
}

impl Fighter {
    /// Removes `damage` hit points when positive.
    ///
    /// Returns the death callback the first time hp ends up at or below zero
    /// and `None` on every later call.
    ///
    /// # Examples
    ///
    /// ```
    /// use burrow::{new_entity_id, DeathCallback, Fighter};
    ///
    /// let mut fighter = Fighter {
    ///     owner: new_entity_id(),
    ///     max_hp: 10,
    ///     hp: 10,
    ///     defense: 0,
    ///     power: 3,
    ///     on_death: Some(DeathCallback::Monster),
    /// };
    /// assert_eq!(fighter.take_damage(4), None);
    /// assert_eq!(fighter.take_damage(6), Some(DeathCallback::Monster));
    /// assert_eq!(fighter.take_damage(6), None);
    /// ```
    pub fn take_damage(&mut self, damage: i32) -> Option<DeathCallback> {
        if damage > 0 {
            self.hp -= damage;
        }
        if self.hp <= 0 {
            self.on_death.take()
        } else {
            None
        }
    }

    /// Restores hit points without exceeding the maximum.
    pub fn heal(&mut self, amount: i32) {
        self.hp = (self.hp + amount.max(0)).min(self.max_hp);
    }

    /// Whether hit points are still above zero.
    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }
}

/// Effect bound to a usable item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemEffect {
    Heal,
    Lightning,
    Confuse,
}

/// Item capability: the entity can be picked up and possibly used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Item {
    /// Entity carrying this capability
    pub owner: EntityId,
    /// `None` for items that cannot be used
    pub effect: Option<ItemEffect>,
}

/// A positioned, drawable world object.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    /// Stable identifier
    pub id: EntityId,
    /// Location on the map
    pub position: Position,
    /// Character drawn for this entity
    pub glyph: char,
    /// Foreground color of the glyph
    pub color: Color,
    /// Display name used in messages
    pub name: String,
    /// Whether this entity blocks movement
    pub blocks: bool,
    pub fighter: Option<Fighter>,
    pub ai: Option<Ai>,
    pub item: Option<Item>,
}

impl Entity {
    /// Creates a bare entity with no capabilities.
    pub fn new(position: Position, glyph: char, name: &str, color: Color, blocks: bool) -> Self {
        Self {
            id: new_entity_id(),
            position,
            glyph,
            color,
            name: name.to_string(),
            blocks,
            fighter: None,
            ai: None,
            item: None,
        }
    }

    /// Attaches a fighter capability at full health.
    pub fn with_fighter(
        mut self,
        (max_hp, defense, power): (i32, i32, i32),
        on_death: DeathCallback,
    ) -> Self {
        self.fighter = Some(Fighter {
            owner: self.id,
            max_hp,
            hp: max_hp,
            defense,
            power,
            on_death: Some(on_death),
        });
        self
    }

    /// Attaches an AI capability.
    pub fn with_ai(mut self, ai: Ai) -> Self {
        self.ai = Some(ai);
        self
    }

    /// Attaches an item capability.
    pub fn with_item(mut self, effect: Option<ItemEffect>) -> Self {
        self.item = Some(Item {
            owner: self.id,
            effect,
        });
        self
    }

    /// The player character.
    pub fn player(position: Position) -> Self {
        Self::new(position, '@', "player", palette::WHITE, true)
            .with_fighter(config::PLAYER_STATS, DeathCallback::Player)
    }

    /// The weak monster.
    pub fn orc(position: Position) -> Self {
        Self::new(position, 'o', "orc", palette::DESATURATED_GREEN, true)
            .with_fighter(config::ORC_STATS, DeathCallback::Monster)
            .with_ai(Ai::Basic)
    }

    /// The strong monster.
    pub fn troll(position: Position) -> Self {
        Self::new(position, 'T', "troll", palette::DARKER_GREEN, true)
            .with_fighter(config::TROLL_STATS, DeathCallback::Monster)
            .with_ai(Ai::Basic)
    }

    pub fn healing_potion(position: Position) -> Self {
        Self::new(position, '!', "healing potion", palette::VIOLET, false)
            .with_item(Some(ItemEffect::Heal))
    }

    pub fn lightning_scroll(position: Position) -> Self {
        Self::new(position, '#', "scroll of lightning bolt", palette::LIGHT_YELLOW, false)
            .with_item(Some(ItemEffect::Lightning))
    }

    pub fn confusion_scroll(position: Position) -> Self {
        Self::new(position, '#', "scroll of confusion", palette::LIGHT_YELLOW, false)
            .with_item(Some(ItemEffect::Confuse))
    }

    /// Whether this entity has a fighter with hit points left.
    pub fn is_alive(&self) -> bool {
        self.fighter.map_or(false, |fighter| fighter.is_alive())
    }

    /// Distance between this entity and a position.
    pub fn distance_to(&self, position: Position) -> f64 {
        self.position.distance_to(position)
    }
}
