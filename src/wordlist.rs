//! Wordlist loading
//!
//! Reads TLD lists in the format IANA publishes (`tlds-alpha-by-domain.txt`):
//! one TLD per line, `#` starts a comment, case is ignored.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use crate::core::error::Result;
use crate::core::types::Wordlist;

/// Build a wordlist from any reader. Every listed TLD maps to `true`.
pub fn from_reader<R: Read>(reader: R) -> Result<Wordlist> {
    let mut wordlist = Wordlist::new();

    for line in BufReader::new(reader).lines() {
        let line = line?;
        let entry = line.split('#').next().unwrap_or_default().trim();
        if entry.is_empty() {
            continue;
        }
        let tld = entry.trim_start_matches('.').to_lowercase();
        wordlist.insert(tld, true);
    }

    log::debug!("Loaded wordlist with {} TLD(s)", wordlist.len());
    Ok(wordlist)
}

pub fn from_str(content: &str) -> Result<Wordlist> {
    from_reader(content.as_bytes())
}

pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Wordlist> {
    let path = path.as_ref();
    let file = File::open(path).inspect_err(|e| {
        log::debug!("Could not open wordlist '{}': {e}", path.display());
    })?;
    from_reader(file)
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use std::io::Write;

    #[test]
    fn test_from_str__iana_format() -> Result<()> {
        let wordlist = from_str("# Version 2024010100, Last Updated Mon Jan  1 07:07:01 2024 UTC\nCOM\nDE\n\nCO.UK  # compound\n.org\n")?;

        assert_eq!(wordlist.len(), 4);
        assert_eq!(wordlist.get("com"), Some(&true));
        assert_eq!(wordlist.get("de"), Some(&true));
        assert_eq!(wordlist.get("co.uk"), Some(&true));
        assert_eq!(wordlist.get("org"), Some(&true));
        assert_eq!(wordlist.get("COM"), None);
        Ok(())
    }

    #[test]
    fn test_from_str__empty() -> Result<()> {
        assert!(from_str("")?.is_empty());
        assert!(from_str("# only a comment\n\n")?.is_empty());
        Ok(())
    }

    #[test]
    fn test_load_from_file() -> Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(b"com\nnet\n")?;

        let wordlist = load_from_file(file.path())?;
        assert_eq!(wordlist.len(), 2);
        assert!(wordlist["net"]);
        Ok(())
    }

    #[test]
    fn test_load_from_file__missing() {
        use crate::core::error::DomainScanError;
        use std::error::Error;

        let err = load_from_file("/definitely/not/here/tlds.txt").unwrap_err();
        match err {
            DomainScanError::Io(ref io) => assert_eq!(io.kind(), std::io::ErrorKind::NotFound),
            ref other => panic!("Expected Io error, got {other:?}"),
        }
        assert!(err.source().is_some());
    }
}
