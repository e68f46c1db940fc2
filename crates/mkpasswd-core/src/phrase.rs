//! Passphrase assembly: word selection, delimiter modes, and rendering.

use crate::error::Result;
use crate::source::RandomSource;
use crate::words::{WORD_COUNT, WORDS};

/// Number of words in every passphrase.
pub const WORDS_PER_PHRASE: usize = 6;

/// Entropy contributed by one word: log2 of the dictionary size.
pub const BITS_PER_WORD: u32 = WORD_COUNT.trailing_zeros();

/// Entropy of a full passphrase (66 bits in the default configuration).
pub const PHRASE_BITS: u32 = BITS_PER_WORD * WORDS_PER_PHRASE as u32;

/// Separator placed between consecutive words.
///
/// Chosen once per invocation from the CLI flags and passed in explicitly;
/// there is no global separator state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Delimiter {
    /// Words are concatenated directly
    #[default]
    None,
    /// Words are joined with `-`
    Dash,
    /// Words are joined with ` `
    Space,
}

impl Delimiter {
    /// The separator string placed between words.
    pub fn as_str(self) -> &'static str {
        match self {
            Delimiter::None => "",
            Delimiter::Dash => "-",
            Delimiter::Space => " ",
        }
    }
}

/// Reduce one 32-bit draw to a dictionary index.
///
/// Plain modulo reduction. This is exactly uniform only because
/// [`WORD_COUNT`] is a power of two that divides 2^32 evenly: every index
/// is the image of precisely 2^32 / 2048 input values. A non-power-of-two
/// dictionary would make this biased and would require rejection sampling
/// or a wide-multiply reduction instead.
pub fn select(draw: u32) -> usize {
    draw as usize % WORD_COUNT
}

/// An ordered sequence of [`WORDS_PER_PHRASE`] dictionary words.
///
/// Words are drawn independently with replacement; repeats across
/// positions are allowed and not filtered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Passphrase {
    words: [&'static str; WORDS_PER_PHRASE],
}

impl Passphrase {
    /// Generate a passphrase from `source`.
    ///
    /// Consumes exactly one fresh 32-bit draw per word; draws are never
    /// cached or reused, so each word's randomness is independent of all
    /// others.
    ///
    /// # Errors
    ///
    /// Propagates any `MkpasswdError::ReadError` from the source; partial
    /// passphrases are never returned.
    pub fn generate(source: &mut impl RandomSource) -> Result<Self> {
        let mut words = [""; WORDS_PER_PHRASE];
        for slot in words.iter_mut() {
            *slot = WORDS[select(source.draw_u32()?)];
        }
        Ok(Passphrase { words })
    }

    /// The selected words, in draw order.
    pub fn words(&self) -> &[&'static str] {
        &self.words
    }

    /// Render the passphrase with `delimiter` between consecutive words.
    ///
    /// The separator is never leading or trailing; the trailing newline on
    /// the final output line is the CLI's responsibility.
    pub fn render(&self, delimiter: Delimiter) -> String {
        self.words.join(delimiter.as_str())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::io;
    use std::path::PathBuf;

    use super::*;
    use crate::error::MkpasswdError;

    /// Random source replaying a fixed sequence of draws.
    struct ScriptedSource {
        draws: VecDeque<u32>,
    }

    impl ScriptedSource {
        fn new(draws: &[u32]) -> Self {
            ScriptedSource {
                draws: draws.iter().copied().collect(),
            }
        }
    }

    impl RandomSource for ScriptedSource {
        fn fill(&mut self, buf: &mut [u8]) -> Result<()> {
            assert_eq!(buf.len(), 4, "one draw is exactly four bytes");
            let draw = self.draws.pop_front().ok_or(MkpasswdError::ReadError {
                device: PathBuf::from("scripted"),
                source: io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted"),
            })?;
            buf.copy_from_slice(&draw.to_ne_bytes());
            Ok(())
        }
    }

    // Dictionary indices of Geld, Are, Alto, City, Bang, Fee.
    const GELD_ARE_ALTO_CITY_BANG_FEE: [u32; 6] = [711, 74, 45, 333, 129, 589];

    #[test]
    fn test_entropy_constants() {
        assert_eq!(BITS_PER_WORD, 11);
        assert_eq!(PHRASE_BITS, 66);
    }

    #[test]
    fn test_select_covers_every_index_once_per_cycle() {
        // Together with 2^32 being an exact multiple of 2048 (next test),
        // this proves each index is hit exactly 2^32 / 2048 times over the
        // full 32-bit input range.
        let mut seen = vec![0u32; WORD_COUNT];
        for draw in 0..WORD_COUNT as u32 {
            seen[select(draw)] += 1;
        }
        assert!(seen.iter().all(|&count| count == 1));
    }

    #[test]
    fn test_draw_range_is_exact_multiple_of_word_count() {
        assert_eq!((1u64 << 32) % WORD_COUNT as u64, 0);
    }

    #[test]
    fn test_select_boundary_values() {
        assert_eq!(select(0), 0);
        assert_eq!(select(WORD_COUNT as u32), 0);
        assert_eq!(select(u32::MAX), WORD_COUNT - 1);
    }

    /// Exhaustive no-modulo-bias proof: every possible 32-bit input,
    /// counted per index. Slow, so run explicitly with `--ignored`.
    #[test]
    #[ignore]
    fn test_select_is_uniform_over_all_u32() {
        let mut counts = vec![0u64; WORD_COUNT];
        let mut draw = 0u32;
        loop {
            counts[select(draw)] += 1;
            draw = match draw.checked_add(1) {
                Some(next) => next,
                None => break,
            };
        }
        let expected = (1u64 << 32) / WORD_COUNT as u64;
        assert!(counts.iter().all(|&count| count == expected));
    }

    #[test]
    fn test_generate_uses_one_draw_per_word() {
        let mut source = ScriptedSource::new(&GELD_ARE_ALTO_CITY_BANG_FEE);
        let phrase = Passphrase::generate(&mut source).expect("generate");
        assert_eq!(
            phrase.words(),
            ["Geld", "Are", "Alto", "City", "Bang", "Fee"]
        );
        assert!(source.draws.is_empty(), "exactly six draws consumed");
    }

    #[test]
    fn test_generate_wraps_draws_modulo_dictionary() {
        // Draws offset by multiples of the dictionary size select the same
        // words.
        let offset: Vec<u32> = GELD_ARE_ALTO_CITY_BANG_FEE
            .iter()
            .enumerate()
            .map(|(i, &draw)| draw + (i as u32 + 1) * WORD_COUNT as u32)
            .collect();
        let mut source = ScriptedSource::new(&offset);
        let phrase = Passphrase::generate(&mut source).expect("generate");
        assert_eq!(
            phrase.words(),
            ["Geld", "Are", "Alto", "City", "Bang", "Fee"]
        );
    }

    #[test]
    fn test_generate_fails_when_source_runs_dry() {
        let mut source = ScriptedSource::new(&[711, 74]);
        let err = Passphrase::generate(&mut source).err().expect("should fail");
        assert!(matches!(err, MkpasswdError::ReadError { .. }));
    }

    #[test]
    fn test_render_delimiter_modes() {
        let mut source = ScriptedSource::new(&GELD_ARE_ALTO_CITY_BANG_FEE);
        let phrase = Passphrase::generate(&mut source).expect("generate");
        assert_eq!(phrase.render(Delimiter::None), "GeldAreAltoCityBangFee");
        assert_eq!(phrase.render(Delimiter::Dash), "Geld-Are-Alto-City-Bang-Fee");
        assert_eq!(phrase.render(Delimiter::Space), "Geld Are Alto City Bang Fee");
    }

    #[test]
    fn test_repeated_words_are_kept() {
        let mut source = ScriptedSource::new(&[711, 711, 711, 711, 711, 711]);
        let phrase = Passphrase::generate(&mut source).expect("generate");
        assert_eq!(phrase.render(Delimiter::Dash), "Geld-Geld-Geld-Geld-Geld-Geld");
    }

    #[cfg(unix)]
    #[test]
    fn test_generated_phrases_vary() {
        use std::collections::HashSet;

        use crate::source::DeviceSource;

        // No fixed output is ever expected; across many generations more
        // than one distinct first word must appear.
        let mut source = DeviceSource::open().expect("open platform device");
        let mut first_words = HashSet::new();
        for _ in 0..1000 {
            let phrase = Passphrase::generate(&mut source).expect("generate");
            first_words.insert(phrase.words()[0]);
        }
        assert!(first_words.len() > 1);
    }
}
