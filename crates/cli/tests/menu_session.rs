use bankledger_cli::Session;
use bankledger_core::Entity;

/// Run a scripted session and return everything it printed.
fn run_script(lines: &[&str]) -> String {
    let input = lines.iter().map(|l| format!("{l}\n")).collect::<String>();
    let mut out = Vec::new();

    Session::new(input.as_bytes(), &mut out)
        .run()
        .expect("session I/O failed");

    String::from_utf8(out).expect("output is utf-8")
}

#[test]
fn exit_option_ends_the_session() {
    let out = run_script(&["0", "2"]);

    assert!(out.contains("Exiting..."));
    assert!(!out.contains("Total accounts created"));
}

#[test]
fn end_of_input_ends_the_session_without_error() {
    let out = run_script(&["1", "1"]);

    assert!(out.contains("Enter initial balance (>=0): "));
    assert!(!out.contains("Account created"));
}

#[test]
fn unknown_options_are_reported() {
    let out = run_script(&["42", "1", "7", "0"]);

    assert_eq!(out.matches("Invalid option.").count(), 2);
}

#[test]
fn deposit_and_withdraw_walkthrough() {
    let out = run_script(&[
        "1", "1", "100", // open #1 with 100.0
        "4", "1", // select it
        "5", "50", // deposit
        "6", "200", // insufficient funds
        "6", "150", // empty it
        "7", "0",
    ]);

    assert!(out.contains("Account created: Account{id=1, holder_name=(no name), balance=100.0}"));
    assert!(out.contains("Remember you can set the holder name with option 9 of the menu."));
    assert!(out.contains("Current account selected: Account{id=1, holder_name=(no name), balance=100.0}"));
    assert!(out.contains("Balance after: 150.0"));
    assert!(out.contains("Insufficient funds. Balance unchanged: 150.0"));
    assert!(out.contains("Balance after: 0.0"));
    assert!(out.contains("Current balance: 0.0"));
}

#[test]
fn non_positive_amounts_are_not_reported_as_insufficient_funds() {
    let out = run_script(&["1", "2", "Ana", "10", "4", "1", "6", "-5", "5", "0", "0"]);

    assert!(!out.contains("Insufficient funds"));
    assert_eq!(out.matches("Balance after: 10.0").count(), 2);
}

#[test]
fn invalid_numbers_are_asked_again() {
    let out = run_script(&["1", "1", "ten", "NaN", "10", "0"]);

    assert_eq!(out.matches("Invalid value. Try again.").count(), 2);
    assert!(out.contains("Account created: Account{id=1, holder_name=(no name), balance=10.0}"));
}

#[test]
fn rejected_creation_does_not_consume_an_id() {
    let out = run_script(&[
        "1", "2", "Ana", "-5", // rejected: negative balance
        "1", "2", "   ", "5", // rejected: blank name
        "2", //
        "1", "2", "Ana", "5", //
        "2", "0",
    ]);

    assert_eq!(out.matches("Could not create the account: validation failed:").count(), 2);
    assert!(out.contains("initial balance cannot be negative"));
    assert!(out.contains("holder name cannot be empty"));
    assert!(out.contains("Total accounts created: 0"));
    assert!(out.contains("Account created: Account{id=1, holder_name=Ana, balance=5.0}"));
    assert!(out.contains("Total accounts created: 1"));
}

#[test]
fn operations_need_a_selected_account() {
    let out = run_script(&["5", "6", "7", "8", "9", "0"]);

    assert_eq!(out.matches("No current account selected.").count(), 5);
    assert!(!out.contains("Enter the amount"));
}

#[test]
fn list_marks_the_current_account() {
    let out = run_script(&[
        "3", // nothing yet
        "4", // nothing to select
        "1", "1", "1", //
        "1", "2", "Luis", "2", //
        "4", "2", //
        "3", "0",
    ]);

    assert!(out.contains("No accounts registered."));
    assert!(out.contains("No accounts to select."));
    assert!(out.contains("- Account{id=1, holder_name=(no name), balance=1.0}\n"));
    assert!(out.contains("- Account{id=2, holder_name=Luis, balance=2.0} [CURRENT]\n"));
}

#[test]
fn selecting_an_unknown_id_keeps_the_previous_selection() {
    let mut out = Vec::new();
    let script = ["1", "1", "3", "4", "1", "4", "7", "4", "-1", "4", "0", "0"]
        .iter()
        .map(|l| format!("{l}\n"))
        .collect::<String>();

    let mut session = Session::new(script.as_bytes(), &mut out);
    session.run().unwrap();

    assert_eq!(session.current_account().map(|a| a.id().get()), Some(1));
    assert_eq!(session.accounts().len(), 1);
    assert_eq!(session.registry().total_accounts_created(), 1);
    drop(session);

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("No account found with id 7."));
    assert!(text.contains("No account found with id -1."));
    assert!(text.contains("No account found with id 0."));
}

#[test]
fn rename_updates_the_listed_account() {
    let out = run_script(&[
        "1", "1", "20", //
        "4", "1", //
        "9", "   ", // rejected
        "9", "Ana", //
        "8", "3", "0",
    ]);

    assert!(out.contains("Could not update the name: validation failed: holder name cannot be empty"));
    assert!(out.contains("Name updated. State: Account{id=1, holder_name=Ana, balance=20.0}"));
    assert!(out.contains("- Account{id=1, holder_name=Ana, balance=20.0} [CURRENT]"));
}

#[test]
fn invalid_create_sub_option_is_reported() {
    let out = run_script(&["1", "3", "2", "0"]);

    assert!(out.contains("Invalid option."));
    assert!(out.contains("Total accounts created: 0"));
}

#[test]
fn invalid_utf8_input_is_asked_again_instead_of_ending_the_session() {
    let mut input = b"1\n1\n".to_vec();
    input.extend_from_slice(&[0xff, 0xfe, b'\n']);
    input.extend_from_slice(b"10\n2\n0\n");

    let mut out = Vec::new();
    let mut session = Session::new(input.as_slice(), &mut out);
    session.run().expect("invalid UTF-8 must not abort the session");

    assert_eq!(session.registry().total_accounts_created(), 1);
    drop(session);

    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.matches("Invalid value. Try again.").count(), 1);
    assert!(text.contains("Account created: Account{id=1, holder_name=(no name), balance=10.0}"));
    assert!(text.contains("Total accounts created: 1"));
    assert!(text.contains("Exiting..."));
}

#[test]
fn selection_accepts_ids_with_a_leading_plus_sign() {
    let out = run_script(&["1", "1", "4", "4", "+1", "7", "0"]);

    assert!(out.contains("Current account selected: Account{id=1, holder_name=(no name), balance=4.0}"));
    assert!(out.contains("Current balance: 4.0"));
}
