//! End-to-end scenarios driven through the turn loop.

mod common;

use burrow::{
    config, Ai, BurrowResult, Command, Direction, Entity, GameCompletionState, PlayerAction,
    Position, ScriptedDice,
};

#[test]
fn test_player_death_ends_play() -> BurrowResult<()> {
    let mut state = common::arena(12, 12, Position::new(5, 5));
    let troll = state.add_entity(Entity::troll(Position::new(6, 5)));
    state.get_mut(troll)?.fighter.as_mut().unwrap().power = 100;
    let mut dice = ScriptedDice::default();

    assert_eq!(state.tick(Command::Wait, &mut dice)?, PlayerAction::TookTurn);
    assert_eq!(state.completion_state, GameCompletionState::Dead);
    assert!(state.player_hp().0 <= 0);

    let corpse = state.player()?;
    assert_eq!(corpse.glyph, '%');
    assert_eq!(corpse.name, "player");

    assert_eq!(
        state.tick(Command::Move(Direction::West), &mut dice)?,
        PlayerAction::DidntTakeTurn
    );
    assert_eq!(state.player()?.position, Position::new(5, 5));
    assert_eq!(state.tick(Command::Exit, &mut dice)?, PlayerAction::Exit);
    Ok(())
}

#[test]
fn test_fight_until_orc_dies() -> BurrowResult<()> {
    let mut state = common::arena(12, 12, Position::new(5, 5));
    let orc = state.add_entity(Entity::orc(Position::new(6, 5)));
    let mut dice = ScriptedDice::default();

    state.tick(Command::Move(Direction::East), &mut dice)?;
    state.tick(Command::Move(Direction::East), &mut dice)?;

    let remains = state.entity(orc).unwrap();
    assert_eq!(remains.name, "remains of orc");
    assert!(remains.fighter.is_none());
    // one orc retaliation between the two blows
    assert_eq!(state.player_hp(), (29, 30));

    state.tick(Command::Move(Direction::East), &mut dice)?;
    assert_eq!(state.player()?.position, Position::new(6, 5));
    assert_eq!(state.names_at(Position::new(6, 5)), "remains of orc, player");
    Ok(())
}

#[test]
fn test_confusion_scroll_lifecycle() -> BurrowResult<()> {
    let mut state = common::arena(20, 20, Position::new(5, 5));
    state.add_entity(Entity::confusion_scroll(Position::new(5, 5)));
    let orc = state.add_entity(Entity::orc(Position::new(12, 5)));
    // Zero deltas keep the confused orc where it stands
    let mut dice = ScriptedDice::new(vec![0; 2 * config::CONFUSE_NUM_TURNS as usize]);

    assert_eq!(state.tick(Command::PickUp, &mut dice)?, PlayerAction::TookTurn);
    let after_pickup = state.entity(orc).unwrap().position;
    assert_eq!(after_pickup, Position::new(11, 5));

    assert_eq!(state.tick(Command::UseItem(0), &mut dice)?, PlayerAction::TookTurn);
    assert!(state.inventory().is_empty());

    // Using the scroll took a turn, so the orc already stumbled once
    for _ in 2..config::CONFUSE_NUM_TURNS {
        state.tick(Command::Wait, &mut dice)?;
        assert!(matches!(state.entity(orc).unwrap().ai, Some(Ai::Confused { .. })));
    }
    assert_eq!(state.entity(orc).unwrap().position, after_pickup);

    state.tick(Command::Wait, &mut dice)?;
    assert_eq!(state.entity(orc).unwrap().ai, Some(Ai::Basic));
    assert_eq!(
        state.messages.last().unwrap().0,
        "The orc is no longer confused!"
    );

    state.tick(Command::Wait, &mut dice)?;
    assert_eq!(state.entity(orc).unwrap().position, Position::new(10, 5));
    Ok(())
}

#[test]
fn test_lightning_without_target_keeps_scroll() -> BurrowResult<()> {
    let mut state = common::arena(30, 12, Position::new(3, 5));
    state.add_entity(Entity::lightning_scroll(Position::new(3, 5)));
    let far = state.add_entity(Entity::orc(Position::new(26, 5)));
    let mut dice = ScriptedDice::default();

    state.tick(Command::PickUp, &mut dice)?;
    let far_before = state.entity(far).unwrap().clone();
    let messages_before = state.messages.len();

    assert_eq!(
        state.tick(Command::UseItem(0), &mut dice)?,
        PlayerAction::DidntTakeTurn
    );
    assert_eq!(state.inventory().len(), 1);
    assert_eq!(state.entity(far).unwrap(), &far_before);
    assert_eq!(state.messages.len(), messages_before + 1);
    assert_eq!(
        state.messages.last().unwrap().0,
        "No enemy is close enough to strike."
    );
    Ok(())
}

#[test]
fn test_dropped_item_lies_under_monsters() -> BurrowResult<()> {
    let mut state = common::arena(12, 12, Position::new(5, 5));
    state.add_entity(Entity::healing_potion(Position::new(5, 5)));
    let mut dice = ScriptedDice::default();

    state.tick(Command::PickUp, &mut dice)?;
    state.add_entity(Entity::orc(Position::new(9, 9)));
    state.tick(Command::DropItem(0), &mut dice)?;

    let first = state.draw_list().next().unwrap();
    assert_eq!(first.name, "healing potion");
    assert_eq!(first.position, Position::new(5, 5));
    Ok(())
}
