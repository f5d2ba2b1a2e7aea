//! Command-line front end for a student roster kept in a JSON file.

use std::fmt;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::builder::NonEmptyStringValueParser;
use clap::{Parser, Subcommand, ValueEnum};
use roster::{
    JsonFileStore, RecordList, RecordStore, StoreError, Student, StudentPatch, DEFAULT_FILE,
};

const NOT_FOUND: &str = "No student with the given name/roll number is found.";

#[derive(Parser)]
#[command(name = "roster")]
#[command(about = "Manage a student roster stored as JSON", long_about = None)]
struct Cli {
    /// Roster file.
    #[arg(short, long, env = "ROSTER_FILE", default_value = DEFAULT_FILE, global = true)]
    file: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Display all students
    List {
        /// Show in this order without saving it.
        #[arg(long, value_enum)]
        sort: Option<SortKey>,
    },
    /// Sort the roster and save the new order
    Sort {
        #[arg(value_enum)]
        key: SortKey,
    },
    /// Add a new student
    Add {
        #[arg(long, value_parser = NonEmptyStringValueParser::new())]
        name: String,
        #[arg(long)]
        age: u32,
        #[arg(long)]
        roll_number: i32,
        #[arg(long, value_parser = NonEmptyStringValueParser::new())]
        grade: String,
    },
    /// Search by roll number or name
    Search {
        query: String,
    },
    /// Update a student's name, age or grade
    Update {
        #[arg(value_parser = NonEmptyStringValueParser::new())]
        query: String,
        /// Which match to update when several are found (1-based).
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        pick: Option<u32>,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        age: Option<u32>,
        #[arg(long)]
        grade: Option<String>,
    },
    /// Delete a student
    Remove {
        #[arg(value_parser = NonEmptyStringValueParser::new())]
        query: String,
        /// Which match to delete when several are found (1-based).
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        pick: Option<u32>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum SortKey {
    Name,
    Age,
}

#[derive(Debug)]
enum CliError {
    Store(StoreError),
    Output(io::Error),
    PickOutOfRange { pick: u32, matches: usize },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Store(err) => write!(f, "{}", err),
            CliError::Output(err) => write!(f, "failed to write output: {}", err),
            CliError::PickOutOfRange { pick, matches } => {
                write!(f, "--pick {} is out of range ({} matches)", pick, matches)
            }
        }
    }
}

impl std::error::Error for CliError {}

impl From<StoreError> for CliError {
    fn from(err: StoreError) -> Self {
        CliError::Store(err)
    }
}

impl From<io::Error> for CliError {
    fn from(err: io::Error) -> Self {
        CliError::Output(err)
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let store = JsonFileStore::new(cli.file);
    let mut out = io::stdout().lock();

    match run(cli.command, &store, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run<W: Write>(command: Commands, store: &JsonFileStore, out: &mut W) -> Result<(), CliError> {
    let mut students: RecordList<Student> = store.load()?;

    match command {
        Commands::List { sort } => {
            if let Some(key) = sort {
                sort_by(&mut students, key);
            }
            students.display_all(out)?;
        }
        Commands::Sort { key } => {
            sort_by(&mut students, key);
            students.display_all(out)?;
            save(store, &students, out)?;
        }
        Commands::Add {
            name,
            age,
            roll_number,
            grade,
        } => {
            students.add(Student::new(name.as_str(), age, roll_number, grade));
            writeln!(out, "{} is added to students list.", name)?;
            save(store, &students, out)?;
        }
        Commands::Search { query } => {
            let mut found = students.search(&query).peekable();
            if found.peek().is_none() {
                writeln!(out, "{}", NOT_FOUND)?;
                return Ok(());
            }

            writeln!(out, "Search result for '{}':", query)?;
            for student in found {
                writeln!(out, "{}", student)?;
            }
        }
        Commands::Update {
            query,
            pick,
            name,
            age,
            grade,
        } => {
            let Some(target) = choose(&students, &query, pick, out)? else {
                return Ok(());
            };

            let patch = StudentPatch { name, age, grade };
            if patch.is_empty() {
                writeln!(out, "Nothing to update.")?;
                return Ok(());
            }

            let Some(index) = students.iter().position(|s| *s == target) else {
                return Ok(());
            };
            students.update_at(index, patch);
            if let Some(updated) = students.get(index) {
                writeln!(out, "Student information is updated to: \n{}", updated)?;
            }
            save(store, &students, out)?;
        }
        Commands::Remove { query, pick } => {
            let Some(target) = choose(&students, &query, pick, out)? else {
                return Ok(());
            };

            students.remove(&target);
            writeln!(out, "Student deleted successfully!")?;
            save(store, &students, out)?;
        }
    }

    Ok(())
}

fn sort_by(students: &mut RecordList<Student>, key: SortKey) {
    match key {
        SortKey::Name => students.sort_by_name(),
        SortKey::Age => students.sort_by_age(),
    }
}

/// Resolve `query` to a single student. Prints the candidates and returns
/// `None` when the choice is ambiguous or nothing matched.
fn choose<W: Write>(
    students: &RecordList<Student>,
    query: &str,
    pick: Option<u32>,
    out: &mut W,
) -> Result<Option<Student>, CliError> {
    let matches: Vec<&Student> = students.search(query).collect();

    if matches.is_empty() {
        writeln!(out, "{}", NOT_FOUND)?;
        return Ok(None);
    }

    let index = match pick {
        Some(pick) => {
            let index = pick as usize - 1;
            if index >= matches.len() {
                return Err(CliError::PickOutOfRange {
                    pick,
                    matches: matches.len(),
                });
            }
            index
        }
        None if matches.len() == 1 => 0,
        None => {
            writeln!(out, "Several students match '{}'; choose one with --pick:", query)?;
            for (i, student) in matches.iter().enumerate() {
                writeln!(out, "{}.\n{}", i + 1, student)?;
            }
            return Ok(None);
        }
    };

    Ok(Some(matches[index].clone()))
}

fn save<W: Write>(
    store: &JsonFileStore,
    students: &RecordList<Student>,
    out: &mut W,
) -> Result<(), CliError> {
    store.save(students)?;
    writeln!(out, "Saved successfully!")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn abel() -> Student {
        Student::new("Abel", 20, 1, "A")
    }

    fn abe() -> Student {
        Student::new("Abe", 22, 3, "C")
    }

    fn bea() -> Student {
        Student::new("Bea", 19, 2, "B")
    }

    fn store_with(students: Vec<Student>) -> (TempDir, JsonFileStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("students.json"));
        store.save(&RecordList::from(students)).unwrap();
        (dir, store)
    }

    fn run_ok(command: Commands, store: &JsonFileStore) -> String {
        let mut out = Vec::new();
        run(command, store, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn stored(store: &JsonFileStore) -> Vec<Student> {
        store.load::<Student>().unwrap().into_vec()
    }

    #[test]
    fn ambiguous_query_lists_candidates_without_saving() {
        let (_dir, store) = store_with(vec![abel(), bea(), abe()]);
        let before = std::fs::read_to_string(store.path()).unwrap();

        let out = run_ok(
            Commands::Remove {
                query: "Abe".into(),
                pick: None,
            },
            &store,
        );

        assert!(out.contains("choose one with --pick"));
        assert!(out.contains("1.\nName: Abel"));
        assert!(out.contains("2.\nName: Abe\n"));
        assert_eq!(std::fs::read_to_string(store.path()).unwrap(), before);
    }

    #[test]
    fn pick_selects_among_candidates() {
        let (_dir, store) = store_with(vec![abel(), bea(), abe()]);

        run_ok(
            Commands::Remove {
                query: "Abe".into(),
                pick: Some(2),
            },
            &store,
        );

        assert_eq!(stored(&store), vec![abel(), bea()]);
    }

    #[test]
    fn pick_out_of_range_is_an_error() {
        let (_dir, store) = store_with(vec![abel(), abe()]);
        let mut out = Vec::new();

        let err = run(
            Commands::Remove {
                query: "Abe".into(),
                pick: Some(3),
            },
            &store,
            &mut out,
        )
        .unwrap_err();

        assert!(matches!(
            err,
            CliError::PickOutOfRange {
                pick: 3,
                matches: 2
            }
        ));
        assert_eq!(stored(&store).len(), 2);
    }

    #[test]
    fn update_changes_only_given_fields() {
        let (_dir, store) = store_with(vec![abel(), bea()]);

        let out = run_ok(
            Commands::Update {
                query: "2".into(),
                pick: None,
                name: None,
                age: Some(21),
                grade: Some(String::new()),
            },
            &store,
        );

        assert!(out.contains("Name: Bea\nAge: 21\nRoll Number: 2\nGrade: B"));
        assert_eq!(stored(&store), vec![abel(), Student::new("Bea", 21, 2, "B")]);
    }

    #[test]
    fn sort_saves_the_new_order() {
        let (_dir, store) = store_with(vec![abel(), bea()]);

        let out = run_ok(
            Commands::Sort {
                key: SortKey::Age,
            },
            &store,
        );

        assert!(out.ends_with("Saved successfully!\n"));
        assert_eq!(stored(&store), vec![bea(), abel()]);
    }

    #[test]
    fn list_sort_does_not_save() {
        let (_dir, store) = store_with(vec![abel(), bea()]);

        let out = run_ok(
            Commands::List {
                sort: Some(SortKey::Age),
            },
            &store,
        );

        assert!(out.find("Name: Bea").unwrap() < out.find("Name: Abel").unwrap());
        assert_eq!(stored(&store), vec![abel(), bea()]);
    }

    #[test]
    fn missing_student_prints_not_found() {
        let (_dir, store) = store_with(vec![abel()]);

        for command in [
            Commands::Search {
                query: "Zed".into(),
            },
            Commands::Remove {
                query: "Zed".into(),
                pick: None,
            },
        ] {
            assert_eq!(run_ok(command, &store), format!("{}\n", NOT_FOUND));
        }
        assert_eq!(stored(&store), vec![abel()]);
    }

    #[test]
    fn add_appends_and_saves() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("fresh.json"));

        let out = run_ok(
            Commands::Add {
                name: "Cy".into(),
                age: 18,
                roll_number: 4,
                grade: "C".into(),
            },
            &store,
        );

        assert!(out.starts_with("Cy is added to students list."));
        assert_eq!(stored(&store), vec![Student::new("Cy", 18, 4, "C")]);
    }
}
