//! Renders session events and prompts as the lines the player reads.
//!
//! Wording follows the classic teletype game: upper-case menus and prompts,
//! sentence-case battle narration.

use game_core::{
    Catalog, CombatOutcome, EnemyProfile, LoadoutError, Prompt, SessionEvent, Side, TurnEvent,
    WeaponType,
};

use crate::message::MessageEntry;

const WEAPON_HEADER: &str = "TYPE                         CARGO SPACE    REL. STRENGTH";

const MANEUVERS: [&str; 9] = [
    "FIRE PHASERS",
    "FIRE ANTI-MATTER MISSILE",
    "FIRE HYPERSPACE LANCE",
    "FIRE PHOTON TORPEDO",
    "ACTIVE HYPERON NEUTRALIZATION FIELD",
    "SELF-DESTRUCT",
    "CHANGE VELOCITY",
    "DISENGAGE",
    "PROCEED",
];

/// Question text for a prompt.
pub fn prompt_text(prompt: &Prompt) -> String {
    match prompt {
        Prompt::Instructions => "DO YOU WISH INSTRUCTIONS?".to_string(),
        Prompt::ManeuverChart => "DO YOU WISH A MANUEVER CHART?".to_string(),
        Prompt::PatrolSystem { count } => format!("SELECT A SYSTEM(1-{count})?"),
        Prompt::Ship { count } => format!("WHICH SPACECRAFT WOULD YOU LIKE(1-{count})?"),
        Prompt::Weapon { .. } => "CHOOSE A WEAPON?".to_string(),
        Prompt::Quantity { .. } => "HOW MANY?".to_string(),
    }
}

/// Lines for one event. Some events (a patrol system choice) print nothing.
pub fn render_event(
    event: &SessionEvent,
    catalog: &Catalog,
    enemy: &EnemyProfile,
) -> Vec<MessageEntry> {
    match event {
        SessionEvent::Intro => intro(),
        SessionEvent::InstructionsShown => instructions(catalog),
        SessionEvent::ManeuverChartShown => maneuver_chart(),
        SessionEvent::SystemMenu => system_menu(catalog),
        SessionEvent::PatrolSystemSelected(_) => Vec::new(),
        SessionEvent::ShipSelected { selection, ship } => vec![
            MessageEntry::highlight(format!(
                "{selection} {} SELECTED",
                ship.name().to_uppercase()
            )),
            MessageEntry::info(format!(
                "YOU HAVE {} UNITS OF CARGO SPACE TO FILL WITH WEAPONRY",
                ship.cargo_capacity
            )),
            MessageEntry::info("CHOOSE A WEAPON AND THE AMOUNT YOU WISH"),
        ],
        SessionEvent::WeaponMenu { .. } => weapon_menu(catalog),
        SessionEvent::WeaponLoaded(receipt) => vec![MessageEntry::info(format!(
            "REMAINING CARGO SPACE: {}",
            receipt.remaining
        ))],
        SessionEvent::CargoFull => vec![MessageEntry::highlight("CARGO SPACE IS FULL")],
        SessionEvent::SelectionComplete => {
            vec![MessageEntry::highlight("WEAPON SELECTION COMPLETE")]
        }
        SessionEvent::Rejected(err) => vec![MessageEntry::warning(rejection(err))],
        SessionEvent::BattleStarted { loadout } => {
            let mut lines = vec![
                MessageEntry::blank(),
                MessageEntry::highlight("=== BATTLE INITIATED ==="),
                MessageEntry::info(format!(
                    "You are now engaging {} in battle! Use your weapons wisely.",
                    enemy.name
                )),
                MessageEntry::info(format!(
                    "{} has {} health and {} protection.",
                    enemy.name, enemy.health, enemy.protection
                )),
                MessageEntry::info("Your ship is equipped with the following loadout:"),
            ];
            if loadout.is_empty() {
                lines.push(MessageEntry::info("- nothing"));
            }
            lines.extend(loadout.entries().iter().map(|entry| {
                MessageEntry::info(format!(
                    "- {} x {} (Strength: {})",
                    entry.quantity,
                    entry.weapon.name(),
                    entry.weapon.strength
                ))
            }));
            lines
        }
        SessionEvent::Turn(turn) => vec![MessageEntry::info(turn_line(turn, enemy))],
        SessionEvent::Stalemate(_) => vec![MessageEntry::warning(format!(
            "Neither ship can damage the other. {} breaks off the engagement.",
            enemy.name
        ))],
        SessionEvent::BattleEnded(outcome) => outcome_lines(*outcome, enemy),
    }
}

fn intro() -> Vec<MessageEntry> {
    vec![
        MessageEntry::highlight(format!("{}DEEPSPACE", " ".repeat(28))),
        MessageEntry::info(format!("{}CREATIVE COMPUTING", " ".repeat(24))),
        MessageEntry::info(format!("{}MORRISTOWN, NEW JERSEY", " ".repeat(22))),
        MessageEntry::blank(),
        MessageEntry::blank(),
        MessageEntry::blank(),
        MessageEntry::info("THIS IS DEEPSPACE, A TACTICAL SIMULATION OF SHIP TO SHIP"),
        MessageEntry::info("COMBAT IN DEEP SPACE"),
    ]
}

fn instructions(catalog: &Catalog) -> Vec<MessageEntry> {
    let mut lines: Vec<MessageEntry> = [
        "YOU ARE ONE OF A GROUP OF CAPTAINS ASSIGNED TO PATROL A",
        "SECTION OF YOUR STAR EMPIRE'S BORDER AGAINST HOSTILE",
        "ALIENS ALL YOUR ENCOUNTERS HERE WILL BE AGAINST HOSTILE",
        "VESSELS YOU WILL FIRST BE REQUIRED TO SELECT A VESSEL",
    ]
    .into_iter()
    .map(MessageEntry::info)
    .collect();

    lines.push(MessageEntry::info(format!(
        "FROM ONE OF {} TYPES, EACH WITH ITS OWN CHARACTERISTICS",
        count_word(catalog.ship_classes().len())
    )));
    lines.push(MessageEntry::blank());
    lines.push(MessageEntry::info(format!(
        "{:<16}{:>6}{:>14}{:>13}",
        "TYPE", "SPEED", "CARGO SPACE", "PROTECTION"
    )));
    for (index, ship) in catalog.ship_classes().iter().enumerate() {
        lines.push(MessageEntry::info(format!(
            "{:<16}{:>6}{:>14}{:>13}",
            format!("{} {}", index + 1, ship.name().to_uppercase()),
            format!("{}X", ship.speed),
            ship.cargo_capacity,
            ship.protection
        )));
    }
    lines.push(MessageEntry::blank());
    lines.extend(
        [
            "SPEED IS GIVEN RELATIVE TO THE OTHER SHIPS",
            "CARGO SPACE IS IN UNITS OF SPACE ABOARD SHIP WHICH CAN BE",
            "FILLED WITH WEAPONS",
            "PROTECTION IS THE RELATIVE STRENGTH OF THE SHIP'S ARMOR",
            "AND FORCE FIELDS",
        ]
        .into_iter()
        .map(MessageEntry::info),
    );
    lines.push(MessageEntry::blank());
    lines
}

fn maneuver_chart() -> Vec<MessageEntry> {
    let mut lines = vec![
        MessageEntry::info("     **************"),
        MessageEntry::highlight("     MANUEVER CHART"),
        MessageEntry::blank(),
    ];
    lines.extend(
        MANEUVERS
            .iter()
            .enumerate()
            .map(|(index, maneuver)| MessageEntry::info(format!(" {}      {maneuver}", index + 1))),
    );
    lines
}

fn system_menu(catalog: &Catalog) -> Vec<MessageEntry> {
    let systems = catalog.patrol_systems();
    let mut lines = vec![
        MessageEntry::blank(),
        MessageEntry::info(format!(
            "YOU HAVE A CHOICE OF {} SYSTEMS TO PATROL",
            count_word(systems.len())
        )),
    ];
    lines.extend(systems.iter().enumerate().map(|(index, system)| {
        MessageEntry::info(format!(
            "{} {}",
            index + 1,
            system.display_name().to_uppercase()
        ))
    }));
    lines
}

fn weapon_menu(catalog: &Catalog) -> Vec<MessageEntry> {
    let mut lines = vec![MessageEntry::blank(), MessageEntry::info(WEAPON_HEADER)];
    lines.extend(
        catalog
            .weapon_types()
            .iter()
            .enumerate()
            .map(|(index, weapon)| MessageEntry::info(weapon_row(index + 1, weapon))),
    );
    lines.push(MessageEntry::info(format!(
        "{} DONE WITH SELECTION",
        catalog.done_selection()
    )));
    lines.push(MessageEntry::blank());
    lines
}

fn weapon_row(selection: usize, weapon: &WeaponType) -> String {
    format!(
        "{:<33}{:>2}{:>17}",
        format!("{selection} {}", weapon.name().to_uppercase()),
        weapon.cargo_cost,
        weapon.strength
    )
}

fn rejection(err: &LoadoutError) -> String {
    match err {
        LoadoutError::DuplicateWeapon { weapon } => {
            format!("{} IS ALREADY LOADED", weapon.display_name().to_uppercase())
        }
        LoadoutError::InsufficientCargo {
            required,
            remaining,
            ..
        } => format!("NOT ENOUGH CARGO SPACE ({required} NEEDED, {remaining} REMAINING)"),
        LoadoutError::InvalidSelection { .. }
        | LoadoutError::Incomplete
        | LoadoutError::OutOfPhase { .. } => "INVALID CHOICE".to_string(),
    }
}

fn turn_line(turn: &TurnEvent, enemy: &EnemyProfile) -> String {
    match turn.attacker {
        Side::Player => format!(
            "You dealt {} damage to {}. {} has {} health remaining.",
            turn.damage, enemy.name, enemy.name, turn.defender_remaining
        ),
        Side::Enemy => format!(
            "{} dealt {} damage to your ship. Your ship has {} health remaining.",
            enemy.name, turn.damage, turn.defender_remaining
        ),
    }
}

fn outcome_lines(outcome: CombatOutcome, enemy: &EnemyProfile) -> Vec<MessageEntry> {
    match outcome {
        CombatOutcome::PlayerVictory => vec![
            MessageEntry::info(format!(
                "Congratulations! You defeated {}! You win the battle!",
                enemy.name
            )),
            MessageEntry::blank(),
            MessageEntry::highlight(
                "You are victorious! The enemy ship has been destroyed. You win!",
            ),
        ],
        CombatOutcome::EnemyVictory => vec![
            MessageEntry::info("Your ship was destroyed. Game Over."),
            MessageEntry::blank(),
            MessageEntry::highlight("The enemy has won. Your ship has been destroyed. Game over."),
        ],
    }
}

fn count_word(count: usize) -> String {
    const WORDS: [&str; 9] = [
        "NO", "ONE", "TWO", "THREE", "FOUR", "FIVE", "SIX", "SEVEN", "EIGHT",
    ];
    WORDS
        .get(count)
        .map_or_else(|| count.to_string(), |word| (*word).to_string())
}
