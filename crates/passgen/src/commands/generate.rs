use passgen_password::{
    charset::CharacterSet, MemorablePasswordGenerator, PinCodeGenerator,
    RandomPasswordGenerator,
};

use super::{print_secrets, word_file_error, OutputArgs, WordArgs};
use crate::Result;

/// Print PIN codes.
pub fn pin(output: OutputArgs, length: i64) -> Result<()> {
    let generator = PinCodeGenerator::new(length)?;
    print_secrets(&generator, &output)
}

/// Print random character passwords.
pub fn random(
    output: OutputArgs,
    length: i64,
    capitalization: bool,
    numbers: bool,
    symbols: bool,
) -> Result<()> {
    let characters = CharacterSet::new()
        .capitalization(capitalization)
        .numbers(numbers)
        .symbols(symbols);
    let generator =
        RandomPasswordGenerator::with_characters(length, characters)?;
    print_secrets(&generator, &output)
}

/// Print memorable passwords.
pub fn memorable(
    output: OutputArgs,
    words: WordArgs,
    word_count: i64,
    separator: String,
    capitalize: bool,
) -> Result<()> {
    let generator = memorable_generator(&words, word_count)?
        .separator(separator)
        .capitalize(capitalize);
    print_secrets(&generator, &output)
}

fn memorable_generator(
    words: &WordArgs,
    word_count: i64,
) -> Result<MemorablePasswordGenerator> {
    let source = words.source();
    MemorablePasswordGenerator::from_source(word_count, &source)
        .map_err(|e| word_file_error(&source, e))
}
