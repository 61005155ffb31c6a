use anyhow::Result;
use passgen_password::{
    charset::{CharacterSet, DIGITS, PUNCTUATION, ROMAN_LOWER, ROMAN_UPPER},
    PasswordGenerator, RandomPasswordGenerator, MESSAGE_PREFIX,
};

fn secret(output: &str) -> &str {
    output
        .strip_prefix("your password is ")
        .expect("message prefix")
}

fn expected_alphabet(characters: &CharacterSet) -> String {
    let mut alphabet = ROMAN_LOWER.to_owned();
    if characters.include_capitalization {
        alphabet.push_str(ROMAN_UPPER);
    }
    if characters.include_numbers {
        alphabet.push_str(DIGITS);
    }
    if characters.include_symbols {
        alphabet.push_str(PUNCTUATION);
    }
    alphabet
}

#[test]
fn passgen_random_prefix() {
    assert_eq!("your password is ", MESSAGE_PREFIX);
}

#[test]
fn passgen_random_flag_combinations() -> Result<()> {
    for bits in 0..8u8 {
        let characters = CharacterSet::new()
            .capitalization(bits & 1 != 0)
            .numbers(bits & 2 != 0)
            .symbols(bits & 4 != 0);
        let alphabet = expected_alphabet(&characters);
        let generator =
            RandomPasswordGenerator::with_characters(24, characters)?;
        assert_eq!(alphabet.chars().count(), generator.alphabet().len());

        for _ in 0..20 {
            let output = generator.generate();
            let secret = secret(&output);
            assert_eq!(24, secret.chars().count());
            assert!(secret.chars().all(|c| alphabet.contains(c)));
        }
    }
    Ok(())
}

#[test]
fn passgen_random_lowercase_five() -> Result<()> {
    let output = RandomPasswordGenerator::new(5)?.generate();
    let secret = secret(&output);
    assert_eq!(5, secret.len());
    assert!(secret.chars().all(|c| c.is_ascii_lowercase()));
    Ok(())
}

#[test]
fn passgen_random_capitalization_excludes_digits_and_symbols() -> Result<()> {
    let generator = RandomPasswordGenerator::new(64)?.capitalization(true);
    for _ in 0..20 {
        let output = generator.generate();
        assert!(secret(&output).chars().all(|c| c.is_ascii_alphabetic()));
    }
    Ok(())
}

#[test]
fn passgen_random_numbers_three() -> Result<()> {
    let output = RandomPasswordGenerator::new(3)?.numbers(true).generate();
    let secret = secret(&output);
    assert_eq!(3, secret.len());
    assert!(secret
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    Ok(())
}

#[test]
fn passgen_random_zero_length() -> Result<()> {
    let output = RandomPasswordGenerator::new(0)?.generate();
    assert_eq!("your password is ", output);
    Ok(())
}
