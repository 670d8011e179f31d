//! CLI declaration of the `tango` drill launcher

use std::io::Write;
use std::path::PathBuf;
use std::rc::Rc;

use crate::application::{CliRegistry, FinalizedRegistry, ParseFailure};
use crate::choice;
use crate::config::Settings;
use crate::domain::{CliOption, DeclarationError};

choice! {
    /// Drill modes, selected with `-m`.
    pub enum Method {
        Kanji => "kanji",
        Translation => "trans",
        Audio => "audio",
        Test => "test",
    }
}

choice! {
    /// Record field an answer is checked against.
    pub enum Answer {
        Kana => "kana",
        Kanji => "kanji",
        Translation => "trans",
    }
}

/// Options of the launcher and the finalized registry they are declared in.
pub struct TangoCli {
    pub rounds: Rc<CliOption<u32>>,
    pub dictionary: Rc<CliOption<PathBuf>>,
    pub answer: Rc<CliOption<Answer>>,
    pub show_kanji: Rc<CliOption<bool>>,
    pub show_kana: Rc<CliOption<bool>>,
    pub show_translation: Rc<CliOption<bool>>,
    pub play_audio: Rc<CliOption<bool>>,
    pub katakana_filter: Rc<CliOption<bool>>,
    registry: FinalizedRegistry<Method>,
}

impl TangoCli {
    /// Declare every method; `settings` supply the defaults of `-r` and `-d`.
    pub fn new(settings: &Settings) -> Result<Self, DeclarationError> {
        let rounds = CliOption::<u32>::value('r', "Rounds.")
            .with_default(settings.rounds)
            .shared();
        let dictionary = CliOption::<PathBuf>::value('d', "Dictionary file.")
            .with_optional_default(settings.dictionary.clone())
            .with_priority(1)
            .shared();
        let answer = CliOption::<Answer>::value('x', "Answer field : [kana, kanji, trans].")
            .with_priority(2)
            .shared();
        let show_kanji = CliOption::flag('k', "Show kanji.").with_priority(10).shared();
        let show_kana = CliOption::flag('a', "Show kana.").with_priority(11).shared();
        let show_translation = CliOption::flag('t', "Show translation.")
            .with_priority(12)
            .shared();
        let play_audio = CliOption::flag('s', "Say the word.").with_priority(13).shared();
        let katakana_filter = CliOption::flag('f', "Katakana look-alike filter.")
            .with_priority(14)
            .shared();

        let mut registry = CliRegistry::<Method>::new();
        registry
            .method(Method::Kanji)
            .describe("赤い -> あかい")
            .mandatory(&[&rounds, &dictionary])
            .optional(&[&play_audio, &katakana_filter]);
        registry
            .method(Method::Translation)
            .describe("красный -> あかい")
            .mandatory(&[&rounds, &dictionary])
            .optional(&[&play_audio, &katakana_filter]);
        registry
            .method(Method::Audio)
            .describe("(voice '赤い') -> あかい")
            .mandatory(&[&rounds, &dictionary])
            .optional(&[&katakana_filter]);
        registry
            .method(Method::Test)
            .describe("Shown fields -> checked answer")
            .mandatory(&[&rounds, &dictionary, &answer])
            .optional(&[
                &show_kanji,
                &show_kana,
                &show_translation,
                &play_audio,
                &katakana_filter,
            ]);

        let rule_rounds = Rc::clone(&rounds);
        let shown = [
            Rc::clone(&show_kanji),
            Rc::clone(&show_kana),
            Rc::clone(&show_translation),
        ];
        registry.validate_with(move |method| {
            if rule_rounds.effective_value() == Some(0) {
                return Err("rounds must be greater than 0".to_string());
            }
            if method == Method::Test && !shown.iter().any(|flag| flag.is_set()) {
                return Err("method 'test' needs at least one of -k, -a, -t".to_string());
            }
            Ok(())
        });

        Ok(Self {
            rounds,
            dictionary,
            answer,
            show_kanji,
            show_kana,
            show_translation,
            play_audio,
            katakana_filter,
            registry: registry.finalize()?,
        })
    }

    /// Parse a full argument vector (program name first).
    pub fn parse_args<I, S>(&self, args: I) -> Result<Method, ParseFailure>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.registry.parse_args(args).map(|parsed| parsed.method())
    }

    pub fn print_usage<W: Write>(&self, out: &mut W, program: &str) -> std::io::Result<()> {
        self.registry.print_usage(out, Some(program))
    }

    pub fn registry(&self) -> &FinalizedRegistry<Method> {
        &self.registry
    }
}
