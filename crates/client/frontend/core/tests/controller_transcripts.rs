use client_frontend_core::{
    ControllerError, FrontendConfig, GameController, MessageConfig, MessageLevel, ScriptedConsole,
};
use game_core::{Catalog, CombatOutcome, GameSession};

const INTRO: [&str; 4] = [
    "DEEPSPACE",
    "CREATIVE COMPUTING",
    "MORRISTOWN, NEW JERSEY",
    "THIS IS DEEPSPACE, A TACTICAL SIMULATION OF SHIP TO SHIP",
];

const WEAPON_MENU: [&str; 6] = [
    "TYPE                         CARGO SPACE    REL. STRENGTH",
    "1 PHASER BANKS                   12                4",
    "2 ANTI-MATTER MISSILE             4               20",
    "3 HYPERSPACE LANCE                4               16",
    "4 PHOTON TORPEDO                  2               10",
    "5 DONE WITH SELECTION",
];

/// Collapses whitespace, drops blank lines and stops at the battle banner.
fn selection_phase(transcript: &[String]) -> Vec<String> {
    transcript
        .iter()
        .take_while(|line| !line.contains("=== BATTLE INITIATED ==="))
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|line| !line.is_empty())
        .collect()
}

fn expected(parts: &[&[&str]]) -> Vec<String> {
    parts
        .iter()
        .flat_map(|part| part.iter())
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .collect()
}

fn play(inputs: &[&str], config: FrontendConfig) -> (ScriptedConsole, Option<CombatOutcome>) {
    let catalog = Catalog::standard();
    let mut session = GameSession::standard(&catalog);
    let mut controller = GameController::new(ScriptedConsole::new(inputs.iter().copied()), config);

    controller.run(&mut session).expect("game runs to completion");
    let outcome = session.report().map(|report| report.outcome);
    (controller.into_console(), outcome)
}

#[test]
fn different_system_choice_transcript() {
    let (console, outcome) = play(&["NO", "NO", "2", "1", "5"], FrontendConfig::default());

    assert_eq!(
        selection_phase(console.transcript()),
        expected(&[
            &INTRO,
            &[
                "COMBAT IN DEEP SPACE",
                "DO YOU WISH INSTRUCTIONS?",
                "DO YOU WISH A MANUEVER CHART?",
                "YOU HAVE A CHOICE OF THREE SYSTEMS TO PATROL",
                "1 ORION",
                "2 DENEB",
                "3 ARCTURUS",
                "SELECT A SYSTEM(1-3)?",
                "WHICH SPACECRAFT WOULD YOU LIKE(1-3)?",
                "1 SCOUT SELECTED",
                "YOU HAVE 16 UNITS OF CARGO SPACE TO FILL WITH WEAPONRY",
                "CHOOSE A WEAPON AND THE AMOUNT YOU WISH",
            ],
            &WEAPON_MENU,
            &["CHOOSE A WEAPON?", "WEAPON SELECTION COMPLETE"],
        ])
    );
    // An unarmed scout still takes damage, so the battle resolves.
    assert_eq!(outcome, Some(CombatOutcome::EnemyVictory));
}

#[test]
fn invalid_inputs_transcript() {
    let (console, _) = play(
        &["NO", "NO", "4", "1", "5", "1", "1", "1", "6", "5"],
        FrontendConfig::default(),
    );

    assert_eq!(
        selection_phase(console.transcript()),
        expected(&[
            &INTRO,
            &[
                "COMBAT IN DEEP SPACE",
                "DO YOU WISH INSTRUCTIONS?",
                "DO YOU WISH A MANUEVER CHART?",
                "YOU HAVE A CHOICE OF THREE SYSTEMS TO PATROL",
                "1 ORION",
                "2 DENEB",
                "3 ARCTURUS",
                "SELECT A SYSTEM(1-3)?",
                "INVALID CHOICE",
                "SELECT A SYSTEM(1-3)?",
                "WHICH SPACECRAFT WOULD YOU LIKE(1-3)?",
                "INVALID CHOICE",
                "WHICH SPACECRAFT WOULD YOU LIKE(1-3)?",
                "1 SCOUT SELECTED",
                "YOU HAVE 16 UNITS OF CARGO SPACE TO FILL WITH WEAPONRY",
                "CHOOSE A WEAPON AND THE AMOUNT YOU WISH",
            ],
            &WEAPON_MENU,
            &["CHOOSE A WEAPON?", "HOW MANY?", "REMAINING CARGO SPACE: 4"],
            &WEAPON_MENU,
            &["CHOOSE A WEAPON?", "INVALID CHOICE"],
            &WEAPON_MENU,
            &["CHOOSE A WEAPON?", "WEAPON SELECTION COMPLETE"],
        ])
    );
}

#[test]
fn maximum_cargo_load_transcript() {
    let (console, outcome) = play(
        &["NO", "NO", "1", "1", "1", "1", "2", "1", "5"],
        FrontendConfig::default(),
    );

    let lines = selection_phase(console.transcript());
    assert_eq!(
        lines[lines.len() - 5..],
        expected(&[&[
            "CHOOSE A WEAPON?",
            "HOW MANY?",
            "REMAINING CARGO SPACE: 0",
            "CARGO SPACE IS FULL",
            "WEAPON SELECTION COMPLETE",
        ]])
    );
    assert_eq!(console.remaining_inputs(), 1);
    assert_eq!(outcome, Some(CombatOutcome::PlayerVictory));

    let transcript = console.transcript();
    assert!(transcript.iter().any(|line| line
        == "You dealt 21 damage to Alien Destroyer. Alien Destroyer has 29 health remaining."));
    assert_eq!(
        transcript.last().map(String::as_str),
        Some("You are victorious! The enemy ship has been destroyed. You win!")
    );
}

#[test]
fn instructions_and_chart_are_shown_on_request() {
    let (console, _) = play(
        &["YES", "y", "1", "1", "1", "1", "5"],
        FrontendConfig::default(),
    );

    let lines = selection_phase(console.transcript());
    let position = |needle: &str| lines.iter().position(|line| line.starts_with(needle));

    let instructions = position("YOU ARE ONE OF A GROUP OF CAPTAINS").expect("instructions shown");
    let chart = position("MANUEVER CHART").expect("chart shown");
    let systems = position("YOU HAVE A CHOICE OF THREE SYSTEMS").expect("system menu shown");
    assert!(instructions < chart && chart < systems);

    assert!(lines.contains(&"3 BATTLESHIP 2X 30 5".to_string()));
    assert!(lines.contains(&"9 PROCEED".to_string()));
    assert!(lines.contains(&"REMAINING CARGO SPACE: 4".to_string()));
}

#[test]
fn battle_turns_can_be_hidden() {
    let config = FrontendConfig::new(MessageConfig {
        show_battle_turns: false,
        ..MessageConfig::default()
    });
    let (console, outcome) = play(&["NO", "NO", "1", "3", "2", "7", "5"], config);

    assert_eq!(outcome, Some(CombatOutcome::PlayerVictory));
    assert!(
        !console
            .transcript()
            .iter()
            .any(|line| line.starts_with("You dealt"))
    );
}

#[test]
fn exhausted_input_is_an_error() {
    let catalog = Catalog::standard();
    let mut session = GameSession::standard(&catalog);
    let mut controller = GameController::new(
        ScriptedConsole::new(["NO", "NO", "1"]),
        FrontendConfig::default(),
    );

    let err = controller.run(&mut session).unwrap_err();
    assert!(matches!(
        &err,
        ControllerError::InputClosed { prompt } if prompt == "WHICH SPACECRAFT WOULD YOU LIKE(1-3)?"
    ));
    assert!(!session.is_finished());

    let last = controller.log().iter().last().expect("closing line logged");
    assert_eq!(last.level, MessageLevel::Error);
    assert_eq!(
        controller.console().transcript().last().map(String::as_str),
        Some("INPUT CLOSED BEFORE THE GAME ENDED")
    );
}

#[test]
fn message_log_keeps_levels() {
    let catalog = Catalog::standard();
    let mut session = GameSession::standard(&catalog);
    let mut controller = GameController::new(
        ScriptedConsole::new(["NO", "NO", "9", "1", "1", "5"]),
        FrontendConfig::new(MessageConfig {
            capacity: 1024,
            ..MessageConfig::default()
        }),
    );
    controller.run(&mut session).unwrap();

    let warnings: Vec<_> = controller
        .log()
        .iter()
        .filter(|entry| entry.level == MessageLevel::Warning)
        .map(|entry| entry.text.as_str())
        .collect();
    assert_eq!(warnings, ["INVALID CHOICE"]);
    assert_eq!(controller.rejections(), 1);
}
