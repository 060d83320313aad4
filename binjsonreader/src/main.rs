//! Command-line tool for validating and querying JSON documents.
//!
//! Usage: jsonreader [OPTIONS] [FILE]
//!
//! ```sh
//! # Print the whole document
//! jsonreader config.json
//!
//! # Validate only
//! jsonreader --check config.json
//!
//! # Select a value by dotted path (numbers index into arrays, and name
//! # fields of objects)
//! echo '{"list":[{"n":1},{"n":2}]}' | jsonreader --get list.1.n
//!
//! # Coerce the selected value to an integer
//! jsonreader --get port --int config.json
//! ```

use anyhow::{anyhow, bail, Context, Result};
use clap::Parser;
use libjsonreader::{parse_with_filename, Object, Value};
use std::fs;
use std::io::{self, Read};
use std::process;

#[derive(Parser)]
#[command(
    name = "jsonreader",
    version,
    about = "Validate and query JSON documents"
)]
struct Cli {
    /// Input file (reads from stdin if omitted or "-")
    file: Option<String>,

    /// Check that the document parses; print "ok" on success
    #[arg(long, conflicts_with_all = ["get", "int"])]
    check: bool,

    /// Dotted path of the value to print, e.g. `list.0.name`
    #[arg(short, long, value_name = "PATH")]
    get: Option<String>,

    /// Print the selected value coerced to an integer
    #[arg(long)]
    int: bool,
}

/// Split a dotted path into segments. Whether a segment names a field or
/// indexes an array is decided by the node it is applied to, so `1` selects
/// the field `"1"` of an object and the second element of an array.
fn parse_path(path: &str) -> Result<Vec<&str>> {
    path.split('.')
        .map(|part| {
            if part.is_empty() {
                bail!("Empty segment in path {:?}", path);
            }
            Ok(part)
        })
        .collect()
}

/// A node reached while walking a path. Array elements are objects, which
/// are not wrapped in a `Value`.
#[derive(Clone, Copy)]
enum Node<'a> {
    Object(&'a Object),
    Value(&'a Value),
}

impl<'a> Node<'a> {
    fn as_object(self) -> Option<&'a Object> {
        match self {
            Node::Object(obj) => Some(obj),
            Node::Value(value) => value.as_object(),
        }
    }
}

fn select<'a>(root: &'a Object, path: &str) -> Result<Node<'a>> {
    let mut node = Node::Object(root);
    let mut walked = String::new();

    for segment in parse_path(path)? {
        node = if let Some(obj) = node.as_object() {
            Node::Value(obj.get(segment).map_err(|e| anyhow!("{}{}", e, at(&walked)))?)
        } else if let Node::Value(Value::Array(arr)) = node {
            let index: usize = segment.parse().map_err(|_| {
                anyhow!("Expected an array index, got {:?}{}", segment, at(&walked))
            })?;
            Node::Object(arr.get(index).map_err(|e| anyhow!("{}{}", e, at(&walked)))?)
        } else {
            bail!("Cannot select {:?} from a scalar{}", segment, at(&walked));
        };

        if !walked.is_empty() {
            walked.push('.');
        }
        walked.push_str(segment);
    }

    Ok(node)
}

fn at(walked: &str) -> String {
    if walked.is_empty() {
        " at the root".to_string()
    } else {
        format!(" at {}", walked)
    }
}

fn render(node: &Node, as_int: bool) -> Result<String> {
    Ok(match node {
        Node::Object(obj) if as_int => Value::Object((*obj).clone()).to_int()?.to_string(),
        Node::Object(obj) => format!("{:?}", obj),
        Node::Value(value) if as_int => value.to_int()?.to_string(),
        Node::Value(value) => value.to_string(),
    })
}

fn read_input(file: Option<&str>) -> Result<(String, String)> {
    match file {
        None | Some("-") => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Error reading stdin")?;
            Ok((buffer, "stdin".to_string()))
        }
        Some(path) => {
            let text =
                fs::read_to_string(path).with_context(|| format!("Error reading {}", path))?;
            Ok((text, path.to_string()))
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let (text, name) = read_input(cli.file.as_deref())?;
    let root = parse_with_filename(&text, Some(&name))?;

    if cli.check {
        println!("ok");
        return Ok(());
    }

    let node = match &cli.get {
        Some(path) => select(&root, path)?,
        None => Node::Object(&root),
    };
    println!("{}", render(&node, cli.int)?);
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}
