//! Running several programs in sequence, feeding the outputs
//! of one program into the next as global bindings.

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::parse::ast::Ident;
use crate::parse::lexer::Token;
use crate::vm::run_source;

pub const LINK_FLAG: &str = "-oi";

/// One `-oi NAMES FILE` link: bind the previous outputs to
/// `names`, in order, then run `path`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub names: Vec<Ident>,
    pub path: PathBuf,
}

pub fn parse_names(names: &str) -> Result<Vec<Ident>> {
    if let Some(c) = names
        .chars()
        .find(|c| Token::is_reserved(*c) || c.is_whitespace())
    {
        return Err(Error::chain(format!(
            "`{}` is not a valid identifier in `{}`",
            c, names
        )));
    }
    Ok(names.chars().collect())
}

/// Splits trailing command line arguments into links. Every link
/// has to be exactly `-oi NAMES FILE`; all of them are checked
/// before anything runs.
pub fn parse_links<S: AsRef<str>>(args: &[S]) -> Result<Vec<Link>> {
    if args.len() % 3 != 0 {
        return Err(Error::chain(format!(
            "expected groups of `{} NAMES FILE`, got {} trailing arguments",
            LINK_FLAG,
            args.len()
        )));
    }
    args.chunks(3)
        .map(|group| {
            let (flag, names, path) = (group[0].as_ref(), group[1].as_ref(), group[2].as_ref());
            if flag != LINK_FLAG {
                return Err(Error::chain(format!(
                    "expected `{}`, found `{}`",
                    LINK_FLAG, flag
                )));
            }
            Ok(Link {
                names: parse_names(names)?,
                path: PathBuf::from(path),
            })
        })
        .collect()
}

/// Builds the assignment statements that bind each name to
/// the matching output of the previous program.
pub fn prelude(names: &[Ident], outputs: &[String]) -> Result<String> {
    if names.len() != outputs.len() {
        return Err(Error::chain(format!(
            "wrong number of identifier names in chain link: {} names for {} outputs",
            names.len(),
            outputs.len()
        )));
    }
    let mut src = String::new();
    for (name, value) in names.iter().zip(outputs) {
        src.push(*name);
        src.push('=');
        src.push_str(value);
        src.push('\n');
    }
    Ok(src)
}

/// Runs `first`, then every link in turn. `load` reads program text,
/// `emit` receives every output line as it is produced. Returns the
/// outputs of the last program.
pub fn run_chain<L>(
    first: &Path,
    links: &[Link],
    config: &Config,
    mut load: L,
    emit: &mut dyn FnMut(&Path, &str),
) -> Result<Vec<String>>
where
    L: FnMut(&Path) -> Result<String>,
{
    log::info!("running {}", first.display());
    let src = load(first)?;
    let mut outputs = run_source(&src, config, &mut |out| emit(first, out))?;
    for link in links {
        let mut src = prelude(&link.names, &outputs)?;
        src.push_str(&load(&link.path)?);
        log::info!("running {}", link.path.display());
        log::debug!("source with prelude:\n{}", src);
        outputs = run_source(&src, config, &mut |out| emit(&link.path, out))?;
    }
    Ok(outputs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    use std::collections::HashMap;

    fn loader(files: &[(&str, &str)]) -> impl FnMut(&Path) -> Result<String> {
        let files: HashMap<PathBuf, String> = files
            .iter()
            .map(|(p, s)| (PathBuf::from(p), s.to_string()))
            .collect();
        move |p: &Path| {
            files.get(p).cloned().ok_or_else(|| {
                Error::from(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    p.display().to_string(),
                ))
            })
        }
    }

    #[test]
    fn prelude_binds_in_order() {
        let outputs = vec!["x".to_string(), "y".to_string()];
        assert_eq!(prelude(&['a', 'b'], &outputs).unwrap(), "a=x\nb=y\n");
    }

    #[test]
    fn prelude_rejects_count_mismatch() {
        let outputs = vec!["x".to_string()];
        let err = prelude(&['a', 'b'], &outputs).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ChainArgument);
    }

    #[test]
    fn names_reject_reserved_symbols() {
        for bad in ["a!", "(", "b)", "=", "a.b", "a b"] {
            assert_eq!(
                parse_names(bad).unwrap_err().kind(),
                ErrorKind::ChainArgument
            );
        }
        assert_eq!(parse_names("abλ").unwrap(), vec!['a', 'b', 'λ']);
    }

    #[test]
    fn links_group_in_threes() {
        let links = parse_links(&["-oi", "ab", "next.bang", "-oi", "c", "last.bang"]).unwrap();
        assert_eq!(
            links,
            vec![
                Link {
                    names: vec!['a', 'b'],
                    path: PathBuf::from("next.bang")
                },
                Link {
                    names: vec!['c'],
                    path: PathBuf::from("last.bang")
                },
            ]
        );
        assert!(parse_links::<&str>(&[]).unwrap().is_empty());
    }

    #[test]
    fn links_reject_bad_grouping() {
        let err = parse_links(&["-oi", "ab"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ChainArgument);
        let err = parse_links(&["-o", "ab", "next.bang"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ChainArgument);
        let err = parse_links(&["-oi", "a=", "next.bang"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ChainArgument);
    }

    #[test]
    fn chain_feeds_outputs_forward() {
        let load = loader(&[
            ("first", "i=!x.x k=!x.!y.x !=i !=(k i)"),
            ("second", "!=(b a)"),
        ]);
        let links = parse_links(&["-oi", "ab", "second"]).unwrap();
        let mut seen = Vec::new();
        let out = run_chain(
            Path::new("first"),
            &links,
            &Config::default(),
            load,
            &mut |p, s| seen.push((p.display().to_string(), s.to_owned())),
        )
        .unwrap();
        // b = !y.!x.x applied to a = !x.x drops the argument
        assert_eq!(out, vec!["! x . x"]);
        assert_eq!(
            seen,
            vec![
                ("first".to_string(), "! x . x".to_string()),
                ("first".to_string(), "! y . ! x . x".to_string()),
                ("second".to_string(), "! x . x".to_string()),
            ]
        );
    }

    #[test]
    fn chain_is_equivalent_to_prepended_assignments() {
        let load = loader(&[("first", "p=!x.x q=!y.y !=p !=q"), ("second", "!=a !=b")]);
        let links = parse_links(&["-oi", "ab", "second"]).unwrap();
        let chained = run_chain(
            Path::new("first"),
            &links,
            &Config::default(),
            load,
            &mut |_, _| {},
        )
        .unwrap();
        let direct = run_source("a=! x . x\nb=! y . y\n!=a !=b", &Config::default(), &mut |_| {})
            .unwrap();
        assert_eq!(chained, direct);
    }

    #[test]
    fn chain_checks_output_count_before_running() {
        let load = loader(&[("first", "i=!x.x !=i"), ("second", "!=z")]);
        let links = parse_links(&["-oi", "ab", "second"]).unwrap();
        let mut seen = 0;
        let err = run_chain(
            Path::new("first"),
            &links,
            &Config::default(),
            load,
            &mut |_, _| seen += 1,
        )
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ChainArgument);
        // only the first program produced anything
        assert_eq!(seen, 1);
    }

    #[test]
    fn chain_reports_missing_file() {
        let load = loader(&[]);
        let err = run_chain(
            Path::new("nope"),
            &[],
            &Config::default(),
            load,
            &mut |_, _| {},
        )
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IO);
    }
}
