//! Property tests for the tick engine invariants

use proptest::prelude::*;

use piston_grid::core::config::PHASE_WINDOW;
use piston_grid::core::types::{Direction, EntityId, GridPos, Operation};
use piston_grid::core::RunConfig;
use piston_grid::simulation::{MoveEvent, PhaseClock, SimulationRun, TickEngine};
use piston_grid::world::{Entity, EntityKind, WorldState};

fn operation() -> impl Strategy<Value = Operation> {
    prop_oneof![
        Just(Operation::Right),
        Just(Operation::Left),
        Just(Operation::Up),
        Just(Operation::Down),
        Just(Operation::Stay),
    ]
}

fn direction() -> impl Strategy<Value = Direction> {
    prop_oneof![
        Just(Direction::Right),
        Just(Direction::Left),
        Just(Direction::Up),
        Just(Direction::Down),
    ]
}

fn cell() -> impl Strategy<Value = (i32, i32)> {
    (0..8i32, 0..8i32)
}

fn player(x: i32, z: i32) -> Entity {
    Entity::new(EntityId::new("player"), GridPos::new(x, z), EntityKind::Player)
}

/// Player plus boxes only, so nothing can move the player but its own commands
fn boxed_world(start: (i32, i32), boxes: &[(i32, i32)]) -> WorldState {
    let mut entities = vec![player(start.0, start.1)];
    for (i, &(x, z)) in boxes.iter().enumerate() {
        entities.push(Entity::new(
            EntityId::new(format!("box-{}", i)),
            GridPos::new(x, z),
            EntityKind::Box,
        ));
    }
    WorldState::new(entities).unwrap()
}

proptest! {
    #[test]
    fn test_player_stays_on_board(
        start in cell(),
        boxes in prop::collection::vec(cell(), 0..10),
        ops in prop::collection::vec(operation(), 0..60),
    ) {
        let mut run = SimulationRun::new(boxed_world(start, &boxes), RunConfig::new(100)).unwrap();
        for op in ops {
            run.apply(op);
            prop_assert!(run.world().player_position().on_board());
        }
    }

    #[test]
    fn test_phase_advances_once_per_settle(
        initial in 0..PHASE_WINDOW,
        ops in prop::collection::vec(operation(), 0..40),
    ) {
        let config = RunConfig::new(100).with_initial_phase(initial);
        let mut run = SimulationRun::new(boxed_world((3, 3), &[]), config).unwrap();
        let mut settles = 0u32;
        for op in ops {
            run.apply(op);
            // Every command ends with exactly one passive sub-tick
            settles += 1;
            let expected = (u32::from(initial) + settles) % u32::from(PHASE_WINDOW);
            prop_assert_eq!(u32::from(run.phase()), expected);
        }
    }

    #[test]
    fn test_each_piston_reports_once_per_settle(
        start in cell(),
        pistons in prop::collection::vec((cell(), direction(), 1u8..=4), 1..6),
        settles in 1usize..15,
    ) {
        let mut entities = vec![player(start.0, start.1)];
        for (i, ((x, z), facing, phase_slot)) in pistons.iter().enumerate() {
            entities.push(Entity::new(
                EntityId::new(format!("piston-{}", i)),
                GridPos::new(*x, *z),
                EntityKind::Piston { facing: *facing, phase_slot: *phase_slot },
            ));
        }
        let mut world = WorldState::new(entities).unwrap();
        let mut engine = TickEngine::new(PhaseClock::new());

        for _ in 0..settles {
            let events = engine.resolve(&mut world, Operation::Stay);
            for i in 0..pistons.len() {
                let id = EntityId::new(format!("piston-{}", i));
                let count = events
                    .iter()
                    .filter(|event| matches!(event, MoveEvent::Piston { .. }) && event.entity_id() == &id)
                    .count();
                prop_assert_eq!(count, 1);
            }
        }
    }

    #[test]
    fn test_exhausted_run_records_nothing(
        budget in 1i32..6,
        stay_costs_energy in any::<bool>(),
        ops in prop::collection::vec(operation(), 0..30),
    ) {
        let config = RunConfig::new(budget).with_stay_cost(stay_costs_energy);
        let mut run = SimulationRun::new(boxed_world((3, 3), &[]), config).unwrap();
        for op in ops {
            let exhausted = run.energy_history().last().is_some_and(|&e| e <= 0);
            let ticks = run.log().len();
            let history = run.energy_history().len();

            let accepted = run.apply(op);

            prop_assert_eq!(accepted, !exhausted);
            if exhausted {
                prop_assert_eq!(run.log().len(), ticks);
                prop_assert_eq!(run.energy_history().len(), history);
            }
            prop_assert_eq!(run.log().len(), run.energy_history().len());
        }
    }
}
