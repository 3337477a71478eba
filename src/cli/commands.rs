//! Command implementations for the FastSpell CLI.

use std::time::Instant;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::{FastSpellError, Result};
use crate::spelling::loader::read_words_from_file;
use crate::spelling::*;

/// Execute a CLI command.
pub fn execute_command(args: FastSpellArgs) -> Result<()> {
    match &args.command {
        Command::Match(match_args) => match_words(match_args, &args),
        Command::Check(match_args) => check_words(match_args, &args),
        Command::Stats(stats_args) => show_stats(stats_args, &args),
    }
}

/// Build a dictionary from the word list and flags.
///
/// Lines longer than the configured maximum word length are skipped with a
/// warning; any other error aborts.
pub fn build_dictionary(args: &DictionaryArgs) -> Result<Dictionary> {
    let config = args.to_config()?;
    let dictionary = match (args.fold_accents, args.lowercase) {
        (true, lowercase) => Dictionary::with_normalizer(
            config,
            AccentFoldingNormalizer::new().with_lowercase(lowercase),
        )?,
        (false, true) => Dictionary::with_normalizer(config, LowercaseNormalizer)?,
        (false, false) => Dictionary::new(config)?,
    };

    let start = Instant::now();
    let words = read_words_from_file(&args.dictionary)?;

    let mut added = 0;
    let mut skipped = 0;
    for (n, word) in words.iter().enumerate() {
        match dictionary.add(word) {
            Ok(true) => added += 1,
            Ok(false) => {}
            Err(FastSpellError::CapacityExceeded { length, max }) => {
                log::warn!(
                    "skipping word {} of {}: {length} characters exceeds {max}",
                    n + 1,
                    args.dictionary.display()
                );
                skipped += 1;
            }
            Err(e) => return Err(e),
        }
    }

    log::info!(
        "indexed {added} words from {} in {} ms ({skipped} skipped)",
        args.dictionary.display(),
        start.elapsed().as_millis()
    );

    Ok(dictionary)
}

/// Print the best match of each word.
fn match_words(args: &MatchArgs, cli_args: &FastSpellArgs) -> Result<()> {
    let dictionary = build_dictionary(&args.dictionary)?;
    let results = dictionary.best_matches(&args.words, args.distance)?;

    let reports: Vec<MatchReport> = args
        .words
        .iter()
        .zip(results)
        .map(|(query, result)| MatchReport {
            query: query.clone(),
            result,
        })
        .collect();

    output_result(&reports, cli_args)
}

/// Print whether each word has a match.
fn check_words(args: &MatchArgs, cli_args: &FastSpellArgs) -> Result<()> {
    let dictionary = build_dictionary(&args.dictionary)?;

    let reports = args
        .words
        .iter()
        .map(|query| {
            Ok(CheckReport {
                query: query.clone(),
                found: dictionary.has_matches(query, args.distance)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    output_result(&reports, cli_args)
}

/// Print dictionary statistics.
fn show_stats(args: &StatsArgs, cli_args: &FastSpellArgs) -> Result<()> {
    let start = Instant::now();
    let dictionary = build_dictionary(&args.dictionary)?;
    let build_ms = start.elapsed().as_millis() as u64;

    let stats = dictionary.stats();
    let report = StatsReport {
        words: stats.words,
        variants: stats.variants,
        postings: stats.postings,
        max_distance: stats.max_distance,
        max_word_length: stats.max_word_length,
        metric: dictionary.config().metric.name().to_string(),
        normalizer: dictionary.normalizer_name().to_string(),
        build_ms,
    };

    output_result(&report, cli_args)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use clap::Parser;
    use tempfile::NamedTempFile;

    use super::*;

    fn word_file() -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        for word in ["Prout", "Pret", "Part", "Tourte"] {
            writeln!(file, "{word}").unwrap();
        }
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_build_dictionary_with_lowercase() {
        let file = word_file();
        let path = file.path().to_str().unwrap();
        let args = FastSpellArgs::try_parse_from(["fastspell", "stats", path, "--lowercase"]).unwrap();

        let Command::Stats(stats_args) = args.command else {
            panic!("Expected Stats command");
        };
        let dictionary = build_dictionary(&stats_args.dictionary).unwrap();
        assert_eq!(dictionary.len(), 4);
        assert!(dictionary.contains("tourte").unwrap());
        assert_eq!(dictionary.normalizer_name(), "lowercase");
    }

    #[test]
    fn test_build_dictionary_with_accent_folding() {
        let file = word_file();
        let path = file.path().to_str().unwrap();
        let args = FastSpellArgs::try_parse_from([
            "fastspell",
            "stats",
            path,
            "--fold-accents",
            "--lowercase",
        ])
        .unwrap();

        let Command::Stats(stats_args) = args.command else {
            panic!("Expected Stats command");
        };
        let dictionary = build_dictionary(&stats_args.dictionary).unwrap();
        let m = dictionary.best_match("prêt", Some(0)).unwrap().unwrap();
        assert_eq!(m.word, "pret");
    }

    #[test]
    fn test_build_dictionary_skips_oversized_words() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "part").unwrap();
        writeln!(file, "{}", "x".repeat(300)).unwrap();
        writeln!(file, "pret").unwrap();
        file.flush().unwrap();

        let path = file.path().to_str().unwrap();
        let args = FastSpellArgs::try_parse_from(["fastspell", "stats", path]).unwrap();
        let Command::Stats(stats_args) = args.command else {
            panic!("Expected Stats command");
        };

        let dictionary = build_dictionary(&stats_args.dictionary).unwrap();
        assert_eq!(dictionary.len(), 2);
        assert!(dictionary.contains("part").unwrap());
        assert!(dictionary.contains("pret").unwrap());
    }

    #[test]
    fn test_execute_commands() {
        let file = word_file();
        let path = file.path().to_str().unwrap();

        for argv in [
            vec!["fastspell", "-q", "match", path, "tour", "pet"],
            vec!["fastspell", "-f", "json", "check", path, "pret", "-d", "0"],
            vec!["fastspell", "stats", path, "--max-distance", "1"],
        ] {
            let args = FastSpellArgs::try_parse_from(argv).unwrap();
            execute_command(args).unwrap();
        }
    }

    #[test]
    fn test_execute_rejects_distance_over_capacity() {
        let file = word_file();
        let path = file.path().to_str().unwrap();
        let args = FastSpellArgs::try_parse_from([
            "fastspell",
            "match",
            path,
            "tour",
            "--max-distance",
            "1",
            "-d",
            "2",
        ])
        .unwrap();
        assert!(execute_command(args).is_err());
    }
}
