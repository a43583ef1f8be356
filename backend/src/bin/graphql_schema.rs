//! Print the GraphQL schema SDL, or write it to a file.
//!
//! # Examples
//! ```sh
//! cargo run --manifest-path backend/Cargo.toml --bin graphql-schema -- --output schema.graphql
//! ```
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use backend::inbound::graphql::schema_sdl;
use cap_std::{ambient_authority, fs::Dir};
use clap::Parser;

/// `graphql-schema` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "graphql-schema",
    about = "Export the users GraphQL schema as SDL",
    version
)]
struct CliArgs {
    /// Write the SDL to this file instead of stdout.
    #[arg(long = "output", value_name = "path")]
    output: Option<PathBuf>,
}

fn main() -> io::Result<()> {
    let args = CliArgs::try_parse().map_err(io::Error::other)?;
    let sdl = schema_sdl();
    match args.output {
        Some(path) => write_sdl(&path, &sdl),
        None => io::stdout().lock().write_all(sdl.as_bytes()),
    }
}

fn write_sdl(path: &Path, sdl: &str) -> io::Result<()> {
    let file_name = path.file_name().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("output path has no file name: {}", path.display()),
        )
    })?;
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let dir = Dir::open_ambient_dir(parent, ambient_authority())?;
    dir.write(file_name, sdl)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn writes_sdl_to_requested_file() {
        let temp = tempfile::tempdir().expect("temp dir");
        let path = temp.path().join("schema.graphql");

        write_sdl(&path, "type Query { users: [User!]! }").expect("write succeeds");

        let written = std::fs::read_to_string(&path).expect("read back");
        assert!(written.contains("users: [User!]!"));
    }

    #[rstest]
    fn rejects_paths_without_file_name() {
        let err = write_sdl(Path::new("/"), "").expect_err("root has no file name");
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }

    #[rstest]
    fn output_flag_is_optional() {
        let bare = CliArgs::try_parse_from(["graphql-schema"]).expect("parses");
        assert!(bare.output.is_none());

        let with_output = CliArgs::try_parse_from(["graphql-schema", "--output", "out.graphql"])
            .expect("parses");
        assert_eq!(with_output.output, Some(PathBuf::from("out.graphql")));
    }
}
