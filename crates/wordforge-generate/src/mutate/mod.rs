use crate::errors::GenerationError;

/// A pure string-to-string mutator applied to one base candidate.
///
/// Implementations must tolerate empty and single-character input. A failing
/// mutation is skipped for that candidate only; it never aborts the pipeline.
pub trait Mutation {
    fn id(&self) -> &'static str;
    fn apply(&self, input: &str) -> Result<String, GenerationError>;
}

/// The ordered mutation pipeline. Registration order is pipeline order and
/// fixes the discovery order of every variant; identity is always first.
pub struct MutationRegistry {
    mutations: Vec<Box<dyn Mutation>>,
}

impl MutationRegistry {
    pub fn new() -> Self {
        let mut registry = Self {
            mutations: Vec::new(),
        };
        register(&mut registry);
        registry
    }

    pub fn register(&mut self, mutation: Box<dyn Mutation>) {
        self.mutations.push(mutation);
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Mutation> {
        self.mutations.iter().map(Box::as_ref)
    }

    pub fn get(&self, id: &str) -> Option<&dyn Mutation> {
        self.mutations
            .iter()
            .find(|mutation| mutation.id() == id)
            .map(Box::as_ref)
    }

    pub fn len(&self) -> usize {
        self.mutations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mutations.is_empty()
    }
}

impl Default for MutationRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn register(registry: &mut MutationRegistry) {
    registry.register(Box::new(Identity));
    registry.register(Box::new(Affix::suffix("mutate.suffix.123", "123")));
    registry.register(Box::new(Affix::suffix("mutate.suffix.1234", "1234")));
    registry.register(Box::new(Affix::suffix("mutate.suffix.12345", "12345")));
    registry.register(Box::new(Affix::suffix("mutate.suffix.1", "1")));
    registry.register(Box::new(Affix::suffix("mutate.suffix.69", "69")));
    registry.register(Box::new(Affix::suffix("mutate.suffix.007", "007")));
    registry.register(Box::new(Affix::prefix("mutate.prefix.123", "123")));
    registry.register(Box::new(Affix::prefix("mutate.prefix.1", "1")));
    registry.register(Box::new(Affix::suffix("mutate.suffix.bang", "!")));
    registry.register(Box::new(Affix::prefix("mutate.prefix.bang", "!")));
    registry.register(Box::new(Affix::wrap("mutate.wrap.dot", ".")));
    registry.register(Box::new(Affix::wrap("mutate.wrap.underscore", "_")));
    registry.register(Box::new(Affix::wrap("mutate.wrap.star", "*")));
    registry.register(Box::new(Reverse));
    registry.register(Box::new(AlternatingCase));
    registry.register(Box::new(Casing::new("mutate.upper", CaseMode::Upper)));
    registry.register(Box::new(Casing::new("mutate.lower", CaseMode::Lower)));
    registry.register(Box::new(Casing::new(
        "mutate.capitalize",
        CaseMode::Capitalize,
    )));
    registry.register(Box::new(Leet::new("mutate.leet.basic", BASIC_LEET)));
    registry.register(Box::new(Leet::new("mutate.leet.full", FULL_LEET)));
    registry.register(Box::new(DoubleLastChar));
}

struct Identity;

impl Mutation for Identity {
    fn id(&self) -> &'static str {
        "mutate.identity"
    }

    fn apply(&self, input: &str) -> Result<String, GenerationError> {
        Ok(input.to_string())
    }
}

/// Prefix, suffix, or symmetric wrap around the candidate.
struct Affix {
    id: &'static str,
    prefix: &'static str,
    suffix: &'static str,
}

impl Affix {
    fn suffix(id: &'static str, suffix: &'static str) -> Self {
        Self {
            id,
            prefix: "",
            suffix,
        }
    }

    fn prefix(id: &'static str, prefix: &'static str) -> Self {
        Self {
            id,
            prefix,
            suffix: "",
        }
    }

    fn wrap(id: &'static str, bracket: &'static str) -> Self {
        Self {
            id,
            prefix: bracket,
            suffix: bracket,
        }
    }
}

impl Mutation for Affix {
    fn id(&self) -> &'static str {
        self.id
    }

    fn apply(&self, input: &str) -> Result<String, GenerationError> {
        Ok(format!("{}{}{}", self.prefix, input, self.suffix))
    }
}

struct Reverse;

impl Mutation for Reverse {
    fn id(&self) -> &'static str {
        "mutate.reverse"
    }

    fn apply(&self, input: &str) -> Result<String, GenerationError> {
        Ok(input.chars().rev().collect())
    }
}

/// Upper/lower alternation by character position, starting upper.
struct AlternatingCase;

impl Mutation for AlternatingCase {
    fn id(&self) -> &'static str {
        "mutate.alternating_case"
    }

    fn apply(&self, input: &str) -> Result<String, GenerationError> {
        let out = input
            .chars()
            .enumerate()
            .flat_map(|(index, ch)| {
                let cased: Vec<char> = if index % 2 == 0 {
                    ch.to_uppercase().collect()
                } else {
                    ch.to_lowercase().collect()
                };
                cased
            })
            .collect();
        Ok(out)
    }
}

enum CaseMode {
    Upper,
    Lower,
    Capitalize,
}

struct Casing {
    id: &'static str,
    mode: CaseMode,
}

impl Casing {
    fn new(id: &'static str, mode: CaseMode) -> Self {
        Self { id, mode }
    }
}

impl Mutation for Casing {
    fn id(&self) -> &'static str {
        self.id
    }

    fn apply(&self, input: &str) -> Result<String, GenerationError> {
        let out = match self.mode {
            CaseMode::Upper => input.to_uppercase(),
            CaseMode::Lower => input.to_lowercase(),
            CaseMode::Capitalize => {
                let mut chars = input.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect(),
                    None => String::new(),
                }
            }
        };
        Ok(out)
    }
}

/// Minimum substitution table required of every leetspeak variant.
const BASIC_LEET: &[(char, char)] = &[('a', '4'), ('e', '3'), ('i', '1'), ('o', '0'), ('s', '5')];

/// Extended table: both cases plus a few more letters.
const FULL_LEET: &[(char, char)] = &[
    ('a', '4'),
    ('A', '4'),
    ('e', '3'),
    ('E', '3'),
    ('i', '1'),
    ('I', '1'),
    ('o', '0'),
    ('O', '0'),
    ('s', '5'),
    ('S', '5'),
    ('t', '7'),
    ('T', '7'),
    ('b', '8'),
    ('B', '8'),
    ('g', '9'),
    ('G', '9'),
    ('l', '1'),
    ('L', '1'),
];

/// Single-pass leetspeak substitution; characters outside the table pass
/// through unchanged, so a string with no mapped letters is returned as-is.
struct Leet {
    id: &'static str,
    table: &'static [(char, char)],
}

impl Leet {
    fn new(id: &'static str, table: &'static [(char, char)]) -> Self {
        Self { id, table }
    }
}

impl Mutation for Leet {
    fn id(&self) -> &'static str {
        self.id
    }

    fn apply(&self, input: &str) -> Result<String, GenerationError> {
        let out = input
            .chars()
            .map(|ch| {
                self.table
                    .iter()
                    .find(|(from, _)| *from == ch)
                    .map(|(_, to)| *to)
                    .unwrap_or(ch)
            })
            .collect();
        Ok(out)
    }
}

struct DoubleLastChar;

impl Mutation for DoubleLastChar {
    fn id(&self) -> &'static str {
        "mutate.double_last"
    }

    fn apply(&self, input: &str) -> Result<String, GenerationError> {
        let mut out = input.to_string();
        if let Some(last) = input.chars().last() {
            out.push(last);
        }
        Ok(out)
    }
}
