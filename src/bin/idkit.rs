//! Command that prints one or '-n count' identifiers of the kind given by '-t'

use std::{env, io, io::Write, process::ExitCode};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use idkit::{
    pattern_for, CaseSensitivity, IdKind, IdentifierRequest, Mapping, RequestKind, SuffixKind,
};

const USAGE: &str = "[-t kind] [-n count] [-u] [-b] [--ns uuid] [--name s] [--node mac] \
    [--data hex] [--prefix p] [--len n] [--alphabet a] [--nanoid-suffix] [--uniform] [-p]";

fn main() -> io::Result<ExitCode> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let opts = {
        let mut args = env::args();
        let program = args.next();
        match parse_args(args) {
            Ok(opts) => opts,
            Err(message) => {
                eprintln!("Error: {}", message);
                eprintln!("Usage: {} {}", program.as_deref().unwrap_or("idkit"), USAGE);
                eprintln!(
                    "Kinds: {}",
                    IdKind::ALL.map(IdKind::short_name).join(", ")
                );
                return Ok(ExitCode::FAILURE);
            }
        }
    };

    let mut buf = io::BufWriter::new(io::stdout());
    if opts.print_pattern {
        let kind = opts.request.kind.id_kind();
        writeln!(buf, "{}", pattern_for(kind, CaseSensitivity::Insensitive))?;
        return Ok(ExitCode::SUCCESS);
    }

    match write_ids(&mut buf, &opts.request, opts.count)? {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(err) => {
            buf.flush()?;
            eprintln!("Error: {}", err);
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Writes `count` identifiers to `out`, one per line, as each is generated.
fn write_ids(
    out: &mut impl Write,
    request: &IdentifierRequest,
    count: usize,
) -> io::Result<Result<(), idkit::Error>> {
    for _ in 0..count {
        match idkit::generate(request) {
            Ok(id) => writeln!(out, "{}", id)?,
            Err(err) => return Ok(Err(err)),
        }
    }
    Ok(Ok(()))
}

#[derive(Debug, PartialEq)]
struct Options {
    request: IdentifierRequest,
    count: usize,
    print_pattern: bool,
}

/// Raw option values, applied to the request of the selected kind once all are read.
#[derive(Default)]
struct Raw {
    kind: Option<IdKind>,
    count: Option<usize>,
    uppercase: bool,
    braces: bool,
    namespace: Option<String>,
    name: Option<String>,
    node: Option<String>,
    data: Option<String>,
    prefix: Option<String>,
    length: Option<usize>,
    alphabet: Option<String>,
    nanoid_suffix: bool,
    uniform: bool,
    print_pattern: bool,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Options, String> {
    fn set<T>(slot: &mut Option<T>, name: &str, value: T) -> Result<(), String> {
        if slot.is_some() {
            return Err(format!("option '{}' given more than once", name));
        }
        slot.replace(value);
        Ok(())
    }

    let mut raw = Raw::default();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-u" => raw.uppercase = true,
            "-b" => raw.braces = true,
            "-p" => raw.print_pattern = true,
            "--nanoid-suffix" => raw.nanoid_suffix = true,
            "--uniform" => raw.uniform = true,
            "-t" | "-n" | "--ns" | "--name" | "--node" | "--data" | "--prefix" | "--len"
            | "--alphabet" => {
                let Some(value) = args.next() else {
                    return Err(format!("argument to option '{}' missing", arg));
                };
                let invalid = || format!("invalid argument to option '{}': '{}'", arg, value);
                match arg.as_str() {
                    "-t" => set(&mut raw.kind, &arg, value.parse().map_err(|_| invalid())?)?,
                    "-n" => set(&mut raw.count, &arg, value.parse().map_err(|_| invalid())?)?,
                    "--len" => set(&mut raw.length, &arg, value.parse().map_err(|_| invalid())?)?,
                    "--ns" => set(&mut raw.namespace, &arg, value)?,
                    "--name" => set(&mut raw.name, &arg, value)?,
                    "--node" => set(&mut raw.node, &arg, value)?,
                    "--data" => set(&mut raw.data, &arg, value)?,
                    "--prefix" => set(&mut raw.prefix, &arg, value)?,
                    _ => set(&mut raw.alphabet, &arg, value)?,
                }
            }
            _ => return Err(format!("unrecognized argument '{}'", arg)),
        }
    }

    let kind = raw.kind.unwrap_or(IdKind::V4);
    let mut request = IdentifierRequest::default_for(kind)
        .uppercase(raw.uppercase)
        .braces(raw.braces);
    let mapping = if raw.uniform {
        Mapping::Uniform
    } else {
        Mapping::Modulo
    };
    match &mut request.kind {
        RequestKind::V1 { node } | RequestKind::V6 { node, .. } => *node = raw.node,
        RequestKind::V3 { namespace, name } | RequestKind::V5 { namespace, name } => {
            if let Some(ns) = raw.namespace {
                *namespace = ns;
            }
            if let Some(n) = raw.name {
                *name = n;
            }
        }
        RequestKind::V8 { custom_data } => *custom_data = raw.data.unwrap_or_default(),
        RequestKind::TimestampId {
            prefix,
            suffix_length,
            suffix,
            mapping: m,
        } => {
            if let Some(p) = raw.prefix {
                *prefix = p;
            }
            if let Some(len) = raw.length {
                *suffix_length = len;
            }
            if raw.nanoid_suffix {
                *suffix = SuffixKind::NanoId;
            }
            *m = mapping;
        }
        RequestKind::NanoId {
            length,
            alphabet,
            mapping: m,
        } => {
            if let Some(len) = raw.length {
                *length = len;
            }
            *alphabet = raw.alphabet;
            *m = mapping;
        }
        RequestKind::V4 | RequestKind::V7 | RequestKind::Nil | RequestKind::Max => {}
    }

    Ok(Options {
        request,
        count: raw.count.unwrap_or(1),
        print_pattern: raw.print_pattern,
    })
}
