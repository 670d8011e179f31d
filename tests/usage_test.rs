//! Integration tests for the rendered usage table.

use methodcli::util::testing;
use methodcli::{choice, CliOption, CliRegistry, FinalizedRegistry};

choice! {
    enum Mode {
        Learn => "LEARN",
        Quiz => "QUIZ",
    }
}

fn registry() -> FinalizedRegistry<Mode> {
    testing::init_test_setup();
    let rounds = CliOption::<u32>::value('r', "Rounds.").with_default(10).shared();
    let dict = CliOption::<String>::value('d', "Dictionary.")
        .with_priority(1)
        .shared();
    let jump = CliOption::flag('j', "Jump ahead.").with_priority(2).shared();
    let mut registry = CliRegistry::<Mode>::new();
    registry
        .method(Mode::Learn)
        .describe("Learn words")
        .mandatory(&[&rounds, &dict])
        .optional(&[&jump]);
    registry.method(Mode::Quiz).describe("Quiz").optional(&[&rounds]);
    registry.finalize().expect("finalize")
}

#[test]
fn given_finalized_registry_when_render_then_table_matches_layout() {
    // Arrange
    let registry = registry();
    let border = format!("\t{}\n", "-".repeat(34));
    let expected = [
        "Usage: tango -m <method> [-<option> <value>]... [-<flag>]...\n",
        "\t -m Method : [LEARN, QUIZ]\n",
        border.as_str(),
        "\t| Method | Description | Options |\n",
        border.as_str(),
        "\t| LEARN  | Learn words | rd[j]   |\n",
        "\t| QUIZ   | Quiz        | [r]     |\n",
        border.as_str(),
        "\n",
        "Options :\n",
        "\t -r Rounds. [default='10']\n",
        "\t -d Dictionary.\n",
        "\t -j Jump ahead.\n",
    ]
    .concat();

    // Act
    let usage = registry.render_usage(Some("tango"));

    // Assert
    assert_eq!(usage, expected);
}

#[test]
fn given_no_program_when_render_then_usage_line_is_omitted() {
    // Arrange
    let registry = registry();

    // Act
    let usage = registry.render_usage(None);

    // Assert
    assert!(usage.starts_with("\t -m Method : [LEARN, QUIZ]\n"));
}

#[test]
fn given_registry_when_printed_twice_then_output_is_identical() {
    // Arrange
    let registry = registry();
    let mut first = Vec::new();
    let mut second = Vec::new();

    // Act
    registry.print_usage(&mut first, Some("tango")).unwrap();
    registry.print_usage(&mut second, Some("tango")).unwrap();

    // Assert
    assert_eq!(first, second);
    assert_eq!(String::from_utf8(first).unwrap(), registry.render_usage(Some("tango")));
}

#[test]
fn given_registry_when_option_names_then_dash_and_sorted_letters() {
    assert_eq!(registry().option_names(), "-djr");
}
