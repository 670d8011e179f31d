//! Dispatch of a parsed `tango` command line

use itertools::Itertools;
use tracing::{debug, instrument};

use crate::cli::args::{Method, TangoCli};
use crate::cli::error::CliResult;
use crate::cli::output;
use crate::domain::Choice;

/// Run the selected method. The drill itself lives outside this crate; the launcher
/// reports the plan it hands over.
pub fn execute_command(cli: &TangoCli, method: Method) -> CliResult<()> {
    match method {
        Method::Kanji | Method::Translation | Method::Audio => cmd_drill(cli, method),
        Method::Test => cmd_test(cli),
    }
}

#[instrument(level = "debug", skip(cli))]
fn cmd_drill(cli: &TangoCli, method: Method) -> CliResult<()> {
    print_common(cli, method);
    if method != Method::Audio {
        output::field("audio", &on_off(cli.play_audio.is_set()));
    }
    output::field("katakana filter", &on_off(cli.katakana_filter.is_set()));
    Ok(())
}

#[instrument(level = "debug", skip(cli))]
fn cmd_test(cli: &TangoCli) -> CliResult<()> {
    print_common(cli, Method::Test);

    let shown = [
        ("kanji", cli.show_kanji.is_set()),
        ("kana", cli.show_kana.is_set()),
        ("trans", cli.show_translation.is_set()),
    ]
    .into_iter()
    .filter_map(|(name, set)| set.then_some(name))
    .join(", ");
    debug!(%shown, "fields shown");
    output::field("shown", &shown);

    if let Some(answer) = cli.answer.effective_value() {
        output::field("answer", &answer);
    }
    output::field("audio", &on_off(cli.play_audio.is_set()));
    output::field("katakana filter", &on_off(cli.katakana_filter.is_set()));
    Ok(())
}

fn print_common(cli: &TangoCli, method: Method) {
    output::header(&format!("tango: {}", method.name()));
    if let Some(rounds) = cli.rounds.effective_value() {
        output::field("rounds", &rounds);
    }
    if let Some(dictionary) = cli.dictionary.effective_value() {
        output::field("dictionary", &dictionary.display());
    }
}

fn on_off(set: bool) -> &'static str {
    if set {
        "on"
    } else {
        "off"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;

    #[test]
    fn test_execute_test_method_after_parse() {
        let cli = TangoCli::new(&Settings::default()).unwrap();
        let method = cli
            .parse_args(["tango", "-m", "test", "-d", "words.txt", "-x", "kana", "-k"])
            .unwrap();

        assert_eq!(method, Method::Test);
        assert!(execute_command(&cli, method).is_ok());
    }

    #[test]
    fn test_on_off() {
        assert_eq!(on_off(true), "on");
        assert_eq!(on_off(false), "off");
    }
}
