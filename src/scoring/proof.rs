//! Integrity proofs
//!
//! A proof is the SHA-256 digest of `code|score|verdict|timestamp` together
//! with that preimage, so anyone holding the text can recompute the digest
//! and detect an edited score or verdict.
//!
//! ```text
//! Integrity Proof (SHA256): <64 hex chars>
//! Verify: <code>|<score>|<verdict>|<unix seconds>
//! (Compute SHA256 to confirm)
//! ```

use serde::Serialize;
use sha2::{Digest, Sha256};
use thiserror::Error;

const HEADER: &str = "Integrity Proof (SHA256): ";
const VERIFY_PREFIX: &str = "Verify: ";
const FOOTER: &str = "(Compute SHA256 to confirm)";

/// Errors raised while checking a proof text
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProofError {
    #[error("Missing proof header: expected a first line starting with \"Integrity Proof (SHA256): \"")]
    MissingHeader,

    #[error("Missing \"Verify:\" preimage section")]
    MissingPreimage,

    #[error("Malformed preimage: {0}")]
    MalformedPreimage(String),

    #[error("Digest mismatch: proof claims {expected}, preimage hashes to {actual}")]
    DigestMismatch { expected: String, actual: String },
}

/// Lowercase hex SHA-256 of a string's UTF-8 bytes.
pub fn sha256_hex(input: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// A digest and the exact string it was computed over.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IntegrityProof {
    pub digest: String,
    pub preimage: String,
}

impl IntegrityProof {
    pub fn generate(code: &str, score: &str, verdict: &str, timestamp: i64) -> Self {
        let preimage = format!("{code}|{score}|{verdict}|{timestamp}");
        Self {
            digest: sha256_hex(&preimage),
            preimage,
        }
    }
}

impl std::fmt::Display for IntegrityProof {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{HEADER}{}\n{VERIFY_PREFIX}{}\n{FOOTER}",
            self.digest, self.preimage
        )
    }
}

/// A proof whose digest matched its preimage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerifiedProof {
    pub digest: String,
    pub code: String,
    pub score: String,
    pub verdict: String,
    pub timestamp: i64,
}

/// Parse proof text, recompute the digest and split the preimage back into
/// its fields.
///
/// The code itself may contain `|` and newlines, so the preimage is split
/// from the right. A preimage always ends in the timestamp digits, so a `\r`
/// left before the footer by CRLF conversion is dropped. Line endings inside
/// the code are part of the digest and must be kept as issued.
pub fn verify_proof(text: &str) -> Result<VerifiedProof, ProofError> {
    let text = text.trim_end_matches(['\r', '\n']);
    let rest = text.strip_prefix(HEADER).ok_or(ProofError::MissingHeader)?;
    let (claimed, rest) = rest.split_once('\n').ok_or(ProofError::MissingPreimage)?;
    let preimage = rest
        .strip_prefix(VERIFY_PREFIX)
        .ok_or(ProofError::MissingPreimage)?;
    let preimage = preimage
        .strip_suffix(FOOTER)
        .and_then(|p| p.strip_suffix('\n'))
        .map(|p| p.strip_suffix('\r').unwrap_or(p))
        .unwrap_or(preimage);

    let expected = claimed.trim().to_lowercase();
    let actual = sha256_hex(preimage);
    if expected != actual {
        return Err(ProofError::DigestMismatch { expected, actual });
    }

    let mut parts = preimage.rsplitn(4, '|');
    let timestamp = parts.next().unwrap_or_default();
    let (Some(verdict), Some(score), Some(code)) = (parts.next(), parts.next(), parts.next())
    else {
        return Err(ProofError::MalformedPreimage(
            "expected code|score|verdict|timestamp".to_string(),
        ));
    };
    let timestamp = timestamp
        .parse::<i64>()
        .map_err(|_| ProofError::MalformedPreimage(format!("invalid timestamp '{timestamp}'")))?;

    Ok(VerifiedProof {
        digest: actual,
        code: code.to_string(),
        score: score.to_string(),
        verdict: verdict.to_string(),
        timestamp,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256_known_vector() {
        assert_eq!(
            sha256_hex("abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_proof_text_layout() {
        let proof = IntegrityProof::generate("x=1", "12%", "VATA REJECTED", 1_700_000_000);
        assert_eq!(proof.preimage, "x=1|12%|VATA REJECTED|1700000000");
        let text = proof.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], format!("Integrity Proof (SHA256): {}", proof.digest));
        assert_eq!(lines[1], "Verify: x=1|12%|VATA REJECTED|1700000000");
        assert_eq!(lines[2], "(Compute SHA256 to confirm)");
    }

    #[test]
    fn test_same_inputs_same_proof() {
        let a = IntegrityProof::generate("code", "50%", "VATA REVIEW NEEDED", 42);
        let b = IntegrityProof::generate("code", "50%", "VATA REVIEW NEEDED", 42);
        let c = IntegrityProof::generate("code", "50%", "VATA REVIEW NEEDED", 43);
        assert_eq!(a, b);
        assert_ne!(a.digest, c.digest);
    }

    #[test]
    fn test_verify_multiline_code_with_pipes() {
        let code = "a = b | c\nprint(a)\n";
        let proof = IntegrityProof::generate(code, "33%", "VATA REJECTED", 99);
        let verified = verify_proof(&proof.to_string()).expect("valid proof");
        assert_eq!(verified.code, code);
        assert_eq!(verified.score, "33%");
        assert_eq!(verified.verdict, "VATA REJECTED");
        assert_eq!(verified.timestamp, 99);
        assert_eq!(verified.digest, proof.digest);
    }

    #[test]
    fn test_verify_tolerates_trailing_newline() {
        let proof = IntegrityProof::generate("y", "5%", "VATA REJECTED", 1);
        assert!(verify_proof(&format!("{proof}\n")).is_ok());
    }

    #[test]
    fn test_verify_proof_resaved_with_crlf() {
        let proof = IntegrityProof::generate("x = 1", "15%", "VATA REJECTED", 7);
        let crlf = format!("{proof}\n").replace('\n', "\r\n");
        let verified = verify_proof(&crlf).expect("crlf proof verifies");
        assert_eq!(verified.code, "x = 1");
        assert_eq!(verified.timestamp, 7);

        // converting newlines inside the code changes what was hashed
        let multiline = IntegrityProof::generate("a\nb", "15%", "VATA REJECTED", 7);
        let crlf = multiline.to_string().replace('\n', "\r\n");
        assert!(matches!(
            verify_proof(&crlf),
            Err(ProofError::DigestMismatch { .. })
        ));
    }

    #[test]
    fn test_verify_detects_tampered_score() {
        let proof = IntegrityProof::generate("y", "5%", "VATA REJECTED", 1);
        let tampered = proof.to_string().replace("|5%|", "|95%|");
        assert!(matches!(
            verify_proof(&tampered),
            Err(ProofError::DigestMismatch { .. })
        ));
    }

    #[test]
    fn test_verify_rejects_garbage() {
        assert_eq!(verify_proof("hello"), Err(ProofError::MissingHeader));
        assert_eq!(
            verify_proof("Integrity Proof (SHA256): abc"),
            Err(ProofError::MissingPreimage)
        );
        assert_eq!(
            verify_proof("No proof generated"),
            Err(ProofError::MissingHeader)
        );
    }

    #[test]
    fn test_verify_malformed_preimage() {
        let preimage = "just-code";
        let text = format!("{HEADER}{}\n{VERIFY_PREFIX}{preimage}\n{FOOTER}", sha256_hex(preimage));
        assert!(matches!(
            verify_proof(&text),
            Err(ProofError::MalformedPreimage(_))
        ));
    }
}
