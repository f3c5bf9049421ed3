mod dirs;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use lib::phrase::{self, Interrogative, Part};
use lib::{
    AdjectiveForm, Config, ConjugationForm, Conjugator, Noun, VerbForm, Word, WordClass,
};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::dirs::Dirs;

#[derive(Parser)]
struct Args {
    /// The class of the word to conjugate. See `--list-classes`.
    #[arg(long, short = 'c', default_value = "godan")]
    class: String,
    /// Only print a single form. See `--list-forms`.
    #[arg(long, short = 'f')]
    form: Option<String>,
    /// Attach a particle like よ to each conjugated form.
    #[arg(long)]
    particle: Option<String>,
    /// Ask a question about the conjugated form using the given interrogative
    /// adverb, like どうして.
    #[arg(long, value_name = "adverb")]
    question: Option<String>,
    /// The subject of a question built with `--question`.
    #[arg(long, requires = "question")]
    subject: Option<String>,
    /// List available `--class` arguments and exit.
    #[arg(long)]
    list_classes: bool,
    /// List available `--form` arguments and exit.
    #[arg(long)]
    list_forms: bool,
    /// Load configuration from the given path instead of the default
    /// location.
    #[arg(long)]
    config: Option<PathBuf>,
    /// The dictionary form of the word to conjugate, like 話す.
    #[arg(name = "dictionary")]
    dictionary: Option<String>,
}

fn main() -> Result<()> {
    let filter = EnvFilter::builder().from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .finish()
        .try_init()?;

    let args = Args::try_parse()?;

    if args.list_classes {
        println!("Available `--class` arguments:");

        for class in WordClass::VALUES {
            println!("{} - {}", class.ident(), class.help());
        }

        return Ok(());
    }

    if args.list_forms {
        println!("Available `--form` arguments for verbs:");

        for form in VerbForm::ALL {
            println!("{} - {} / {}", form.keyword(), form.describe(), form.title());
        }

        println!();
        println!("Available `--form` arguments for adjectives:");

        for form in AdjectiveForm::ALL {
            println!("{} - {} / {}", form.keyword(), form.describe(), form.title());
        }

        return Ok(());
    }

    let config = load_config(args.config.as_deref())?;
    let conjugator = Conjugator::from_config(&config);

    let Some(dictionary) = &args.dictionary else {
        return Err(anyhow!("Missing word to conjugate, try `--help`"));
    };

    let class = WordClass::parse_keyword(&args.class)
        .with_context(|| anyhow!("Invalid word class `{}`", args.class))?;

    let word = Word::parse(class, dictionary)?;

    let forms = match &args.form {
        Some(form) => {
            let form = ConjugationForm::parse_keyword(class, form)
                .with_context(|| anyhow!("Invalid form `{form}` for {class} words"))?;
            vec![form]
        }
        None => all_forms(&word),
    };

    for form in forms {
        let inflected = match conjugator.conjugate(&word, form) {
            Ok(inflected) => inflected,
            Err(error) if args.form.is_none() && error.is_unsupported_form() => {
                tracing::debug!(%form, "Skipping unsupported form");
                continue;
            }
            Err(error) => return Err(error.into()),
        };

        let part = match &word {
            Word::Verb(..) => Part::verb(&inflected),
            Word::Adjective(..) => Part::adjective(&inflected),
        };

        let mut output = match &args.particle {
            Some(particle) => phrase::attach(part, particle.as_str()),
            None => [part].into_iter().collect(),
        };

        if let Some(adverb) = &args.question {
            let subject = match &args.subject {
                Some(subject) => Part::from(&Noun::new(subject)?),
                None => Part::Nested(phrase::Phrase::new()),
            };

            output = Interrogative::new(adverb, subject, output)
                .particle(config.question_particle.as_str())
                .build();
        }

        println!("{form} - {output}");
    }

    Ok(())
}

fn all_forms(word: &Word) -> Vec<ConjugationForm> {
    match word {
        Word::Verb(..) => VerbForm::ALL.iter().copied().map(ConjugationForm::from).collect(),
        Word::Adjective(..) => AdjectiveForm::ALL
            .iter()
            .copied()
            .map(ConjugationForm::from)
            .collect(),
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    let path = match path {
        Some(path) => path.to_owned(),
        None => {
            let path = Dirs::open()?.config_path();

            if !path.is_file() {
                tracing::trace!(path = %path.display(), "No configuration file");
                return Ok(Config::default());
            }

            path
        }
    };

    let data = fs::read_to_string(&path).with_context(|| path.display().to_string())?;
    let config = Config::from_toml(&data).with_context(|| path.display().to_string())?;
    Ok(config)
}
