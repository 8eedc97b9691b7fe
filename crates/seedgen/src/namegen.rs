//! Pool-based identity synthesis.
//!
//! Small compiled-in pools stand in for a full faker library; uniqueness
//! comes from the numeric prefixes the dataset assembler adds, not from
//! pool size. Everything draws from the shared seeded generator so output
//! stays reproducible.

use rand::Rng;

const FIRST_NAMES: &[&str] = &[
    "Ada", "Bruno", "Carmen", "Dmitri", "Elena", "Felix", "Grace", "Hiro", "Ines", "Jonas",
    "Keiko", "Liam", "Mei", "Nadia", "Omar", "Priya", "Quentin", "Rosa", "Sven", "Tomoko",
];

const LAST_NAMES: &[&str] = &[
    "Almeida", "Becker", "Chen", "Dubois", "Eriksson", "Fischer", "Garcia", "Haddad", "Ivanov",
    "Jensen", "Kowalski", "Larsen", "Moreau", "Nakamura", "Okafor", "Petrov", "Quinn", "Rossi",
    "Sato", "Tanaka",
];

const EMAIL_DOMAINS: &[&str] = &[
    "example.com",
    "example.org",
    "example.net",
    "mail.example",
    "inbox.example",
];

const FILE_STEMS: &[&str] = &[
    "report", "invoice", "notes", "draft", "photo", "budget", "summary", "scan", "backup",
    "minutes", "roadmap", "deck", "export", "readme", "mockup", "recording",
];

const FILE_EXTS: &[&str] = &[
    "pdf", "txt", "png", "jpg", "csv", "docx", "xlsx", "md", "zip", "mp4",
];

const SLUG_WORDS: &[&str] = &[
    "archive", "projects", "shared", "team", "media", "legacy", "drafts", "finance", "design",
    "research", "personal", "clients", "assets", "inbox", "vault", "sprint",
];

fn pick<R: Rng + ?Sized>(rng: &mut R, pool: &'static [&'static str]) -> &'static str {
    pool[rng.gen_range(0..pool.len())]
}

pub fn first_name<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    pick(rng, FIRST_NAMES)
}

pub fn last_name<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    pick(rng, LAST_NAMES)
}

/// A lowercase `first.last` handle, drawn independently of any displayed
/// name.
pub fn username<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!(
        "{}.{}",
        pick(rng, FIRST_NAMES).to_lowercase(),
        pick(rng, LAST_NAMES).to_lowercase()
    )
}

pub fn email<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("{}@{}", username(rng), pick(rng, EMAIL_DOMAINS))
}

/// A plausible file name with extension, e.g. `invoice.pdf`.
pub fn file_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("{}.{}", pick(rng, FILE_STEMS), pick(rng, FILE_EXTS))
}

/// A folder slug, e.g. `shared-finance`.
pub fn slug<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("{}-{}", pick(rng, SLUG_WORDS), pick(rng, SLUG_WORDS))
}
