use assert_cmd::Command;
use assert_cmd::cargo_bin;
use predicates::prelude::*;

mod common;

#[test]
fn test_invalid_menu_input_reprompts() {
    let input = common::stdin_script(&["water", "0", "", "1", "done", "n"]);

    Command::new(cargo_bin!("vending-machine"))
        .write_stdin(input)
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Invalid input. Please choose a valid option (1 or 2).")
                .count(2),
        )
        .stdout(predicate::str::contains(
            "Invalid option. Please choose 1 for plain or 2 for fizzy water.",
        ))
        .stdout(predicate::str::contains("Item Menu:").count(4));
}

#[test]
fn test_invalid_coins_are_rejected_without_ending_collection() {
    let input = common::stdin_script(&["1", "3", "20", "ten", "10", "10", "10", "DONE", "n"]);

    Command::new(cargo_bin!("vending-machine"))
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid coin. Please insert 1, 2, 5, or 10 coins.").count(3))
        .stdout(predicate::str::contains(
            "Enjoy your plain water! Your change is 0 coins.",
        ));
}

#[test]
fn test_anything_but_y_ends_session() {
    for answer in ["n", "yes", "", "quit"] {
        let input = common::stdin_script(&["1", "done", answer, "1"]);

        Command::new(cargo_bin!("vending-machine"))
            .write_stdin(input)
            .assert()
            .success()
            .stdout(predicate::str::contains("Item Menu:").count(1))
            .stdout(predicate::str::contains(
                "Thank you for using the Vending Machine!",
            ));
    }
}

#[test]
fn test_closed_stdin_exits_cleanly() {
    for input in ["", "1\n", "1\n10\n", "1\ndone\n"] {
        Command::new(cargo_bin!("vending-machine"))
            .write_stdin(input)
            .assert()
            .success()
            .code(0)
            .stdout(predicate::str::contains(
                "Thank you for using the Vending Machine!",
            ));
    }
}

#[test]
fn test_rejected_input_keeps_stderr_quiet() {
    let input = common::stdin_script(&["abc", "7", "1", "3", "ten", "done", "n"]);

    Command::new(cargo_bin!("vending-machine"))
        .env_remove("RUST_LOG")
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid coin.").count(2))
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_padded_tokens_are_not_trimmed() {
    let input = common::stdin_script(&["1", " 10", "10 ", "done", " y", "1"]);

    Command::new(cargo_bin!("vending-machine"))
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid coin. Please insert 1, 2, 5, or 10 coins.").count(2))
        .stdout(predicate::str::contains("Not enough coins. You need 30 more coins."))
        .stdout(predicate::str::contains("Item Menu:").count(1));
}

#[test]
fn test_huge_menu_number_is_an_invalid_option() {
    let input = common::stdin_script(&["99999999999999999999", "1", "done", "n"]);

    Command::new(cargo_bin!("vending-machine"))
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Invalid option. Please choose 1 for plain or 2 for fizzy water.",
        ))
        .stdout(predicate::str::contains("Invalid input.").not());
}
