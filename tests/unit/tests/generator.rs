use anyhow::Result;
use passgen_password::{
    config::{MemorableConfig, PinConfig, RandomConfig},
    GeneratorConfig, MemorablePasswordGenerator, PasswordGenerator,
    PinCodeGenerator, RandomPasswordGenerator, MESSAGE_PREFIX,
};
use rand::{rngs::StdRng, SeedableRng};
use std::sync::Arc;

fn generators() -> Result<Vec<Box<dyn PasswordGenerator>>> {
    Ok(vec![
        Box::new(PinCodeGenerator::new(4)?),
        Box::new(RandomPasswordGenerator::new(3)?.numbers(true)),
        Box::new(MemorablePasswordGenerator::new(
            2,
            vec!["cat".to_owned(), "dog".to_owned()],
        )?),
    ])
}

#[test]
fn generator_scenarios() -> Result<()> {
    let generators = generators()?;

    let pin = generators[0].generate();
    assert_eq!(4, pin.len());
    assert!(pin.chars().all(|c| c.is_ascii_digit()));

    let random = generators[1].generate();
    let secret = random.strip_prefix(MESSAGE_PREFIX).unwrap();
    assert_eq!(3, secret.len());

    let memorable = generators[2].generate();
    assert!(["cat-cat", "cat-dog", "dog-cat", "dog-dog"]
        .contains(&memorable.as_str()));
    Ok(())
}

#[test]
fn generator_seeded_output_is_deterministic() -> Result<()> {
    for generator in generators()? {
        let first = generator.generate_with(&mut StdRng::seed_from_u64(99));
        let second = generator.generate_with(&mut StdRng::seed_from_u64(99));
        assert_eq!(first, second);
    }
    Ok(())
}

#[test]
fn generator_shared_between_threads() -> Result<()> {
    let generator: Arc<dyn PasswordGenerator> =
        Arc::new(PinCodeGenerator::new(6)?);
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let generator = Arc::clone(&generator);
            std::thread::spawn(move || generator.many(25))
        })
        .collect();
    for handle in handles {
        let pins = handle.join().expect("thread panicked");
        assert_eq!(25, pins.len());
        assert!(pins.iter().all(|pin| pin.len() == 6));
    }
    Ok(())
}

#[test]
fn generator_from_config() -> Result<()> {
    let configs: Vec<GeneratorConfig> = vec![
        PinConfig { length: 10 }.into(),
        RandomConfig::default().into(),
        MemorableConfig {
            vocabulary: Some(vec!["owl".to_owned()]),
            word_count: 2,
            ..Default::default()
        }
        .into(),
    ];
    let outputs: Vec<String> = configs
        .iter()
        .map(|config| Ok(config.build(None)?.generate()))
        .collect::<Result<_>>()?;
    assert_eq!(10, outputs[0].len());
    assert_eq!(MESSAGE_PREFIX.len() + 8, outputs[1].len());
    assert_eq!("owl-owl", outputs[2]);
    Ok(())
}

#[test]
fn generator_profile_file() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("profile.toml");
    std::fs::write(
        &path,
        r#"
kind = "random"
length = 16
include-capitalization = true
include-symbols = true
"#,
    )?;
    let config: GeneratorConfig =
        toml::from_str(&std::fs::read_to_string(&path)?)?;
    let output = config.build(None)?.generate();
    let secret = output.strip_prefix(MESSAGE_PREFIX).unwrap();
    assert_eq!(16, secret.len());
    assert!(!secret.chars().any(|c| c.is_ascii_digit()));
    Ok(())
}
