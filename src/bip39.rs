//! BIP39 mnemonics
//!
//! Turns entropy into a human readable phrase over a 2048 word
//! dictionary and back, and stretches a phrase (plus optional
//! passphrase) into the 64 byte seed the HD wallet is rooted in.
//!
//! The checksum is `entropy_bits / 32` leading bits of
//! `SHA256(entropy)`, appended to the entropy bits before slicing the
//! whole into 11 bit word indices. Any multiple of 32 bits from 128 to
//! 512 is accepted (the combined bit string is then always a whole
//! number of words); anything else fails at [`Entropy`] construction.
//!
//! # Examples
//!
//! ```
//! use baccore::bip39::{self, EntropySize, dictionary};
//!
//! let phrase = bip39::generate(EntropySize::BITS_128, &dictionary::ENGLISH);
//! assert_eq!(phrase.as_str().split_whitespace().count(), 12);
//! ```

use hash;
use hex;
use rand;
use rand::rngs::OsRng;
use rand::RngCore;
use std::{fmt, result, str};
use unicode_normalization::UnicodeNormalization;
use util::bits::{BitReader11, BitWriter11};

pub enum Error {
    WrongNumberOfWords(usize),
    WrongKeySize(usize),
    WordOutOfBound(u16),
    LanguageError(dictionary::Error),
    InvalidSeedSize(usize),
    InvalidChecksum(u16, u16),
}
impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self)
    }
}
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            &Error::WrongNumberOfWords(sz) => {
                write!(f, "unsupported number of mnemonic words: {}", sz)
            }
            &Error::WrongKeySize(sz) => {
                write!(f, "unsupported mnemonic entropy size: {} bits", sz)
            }
            &Error::WordOutOfBound(val) => {
                write!(f, "word index out of bound: {}", val)
            }
            &Error::LanguageError(ref err) => {
                write!(f, "mnemonic dictionary error: {}", err)
            }
            &Error::InvalidSeedSize(sz) => {
                write!(
                    f,
                    "invalid seed size, expected {} bytes, but received {} bytes",
                    SEED_SIZE, sz
                )
            }
            &Error::InvalidChecksum(cs1, cs2) => {
                write!(
                    f,
                    "invalid entropy checksum, expected {:b} but found {:b}",
                    cs1, cs2
                )
            }
        }
    }
}
impl From<dictionary::Error> for Error {
    fn from(e: dictionary::Error) -> Self {
        Error::LanguageError(e)
    }
}

pub type Result<T> = result::Result<T, Error>;

/// The supported entropy sizes: any multiple of 32 bits from 128 to
/// 512. Entropy plus checksum always slices evenly into 11 bit word
/// indices (32k bits of entropy carry k checksum bits, 33k in total).
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
pub struct EntropySize(usize);

/// the smallest accepted entropy size, in bits.
pub const MIN_ENTROPY_BITS: usize = 128;
/// the largest accepted entropy size, in bits.
pub const MAX_ENTROPY_BITS: usize = 512;

impl EntropySize {
    pub const BITS_128: EntropySize = EntropySize(128);
    pub const BITS_160: EntropySize = EntropySize(160);
    pub const BITS_192: EntropySize = EntropySize(192);
    pub const BITS_224: EntropySize = EntropySize(224);
    pub const BITS_256: EntropySize = EntropySize(256);
    pub const BITS_512: EntropySize = EntropySize(512);

    pub fn from_bits(bits: usize) -> Result<Self> {
        if bits % 32 != 0 || bits < MIN_ENTROPY_BITS || bits > MAX_ENTROPY_BITS {
            return Err(Error::WrongKeySize(bits));
        }
        Ok(EntropySize(bits))
    }

    /// 32k bits make 3k words, so the count must be a multiple of 3 in
    /// 12 to 48.
    pub fn from_word_count(count: usize) -> Result<Self> {
        if count % 3 != 0 || count < 12 || count > 48 {
            return Err(Error::WrongNumberOfWords(count));
        }
        Ok(EntropySize(count / 3 * 32))
    }

    pub fn bits(self) -> usize {
        self.0
    }

    pub fn bytes(self) -> usize {
        self.bits() / 8
    }

    /// number of checksum bits appended to the entropy: `bits / 32`.
    pub fn checksum_bits(self) -> usize {
        self.bits() / 32
    }

    pub fn word_count(self) -> usize {
        (self.bits() + self.checksum_bits()) / 11
    }
}

impl Default for EntropySize {
    fn default() -> Self {
        EntropySize::BITS_128
    }
}

impl fmt::Display for EntropySize {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.bits())
    }
}

impl str::FromStr for EntropySize {
    type Err = &'static str;
    fn from_str(s: &str) -> result::Result<Self, Self::Err> {
        let bits = s.parse::<usize>().map_err(|_| "expected a number of bits")?;
        EntropySize::from_bits(bits).map_err(|_| "unsupported mnemonic entropy size")
    }
}

// the first `count` bits of `bytes`, MSB first, right aligned
fn leading_bits(bytes: &[u8], count: usize) -> u16 {
    let mut acc: u16 = 0;
    for i in 0..count {
        let bit = (bytes[i / 8] >> (7 - (i % 8) as u32)) & 1;
        acc = (acc << 1) | bit as u16;
    }
    acc
}

/// Root entropy of a mnemonic phrase. Immutable once constructed.
#[derive(PartialEq, Eq, Clone)]
pub struct Entropy {
    bytes: Vec<u8>,
    size: EntropySize,
}

impl Entropy {
    /// wrap entropy bytes; the length must be one of the supported
    /// sizes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let size = EntropySize::from_bits(bytes.len() * 8)?;
        Ok(Entropy {
            bytes: bytes.to_vec(),
            size: size,
        })
    }

    /// draw fresh entropy from the given generator. The generator is
    /// expected to be cryptographically secure; see [`generate`] for a
    /// convenience built on the operating system RNG.
    pub fn generate<G>(size: EntropySize, gen: G) -> Self
    where
        G: Fn() -> u8,
    {
        let mut bytes = vec![0u8; size.bytes()];
        for b in bytes.iter_mut() {
            *b = gen();
        }
        Entropy {
            bytes: bytes,
            size: size,
        }
    }

    pub fn size(&self) -> EntropySize {
        self.size
    }

    /// the checksum bits, right aligned in a `u16`: the leading
    /// `checksum_bits` bits of `SHA256(entropy)`. Up to 16 bits (512
    /// bit entropy).
    pub fn checksum(&self) -> u16 {
        let digest = hash::sha256(&self.bytes);
        leading_bits(&digest, self.size.checksum_bits())
    }

    pub fn to_mnemonics(&self) -> Mnemonics {
        // append the full hash; the reader only consumes the checksum
        // bits it needs
        let mut combined = self.bytes.clone();
        combined.extend(&hash::sha256(&self.bytes)[..]);

        let mut reader = BitReader11::new(&combined);
        let mut words = Vec::with_capacity(self.size.word_count());
        for _ in 0..self.size.word_count() {
            let idx = reader.read();
            // an 11 bit block can only hold values up to 2047
            words.push(WordIndex::new(idx).expect("11 bit word index is in range"));
        }
        Mnemonics::from_indices(words).expect("word count matches the entropy size")
    }

    /// recover the entropy from a phrase, re-deriving and verifying
    /// the checksum bits.
    pub fn from_mnemonics(mnemonics: &Mnemonics) -> Result<Self> {
        let size = mnemonics.size();

        let mut writer = BitWriter11::new();
        for w in mnemonics.indices() {
            writer.write(w.0);
        }
        let packed = writer.to_bytes();

        let entropy = Entropy {
            bytes: packed[..size.bytes()].to_vec(),
            size: size,
        };
        // the checksum bits follow the entropy, byte aligned since the
        // entropy is a whole number of bytes (zero padded on the right
        // by the writer)
        let found = leading_bits(&packed[size.bytes()..], size.checksum_bits());
        let expected = entropy.checksum();
        if expected != found {
            return Err(Error::InvalidChecksum(expected, found));
        }
        Ok(entropy)
    }
}
impl AsRef<[u8]> for Entropy {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}
impl fmt::Debug for Entropy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", hex::encode(&self.bytes))
    }
}
impl fmt::Display for Entropy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", hex::encode(&self.bytes))
    }
}

/// the index of a word in a 2048 entry dictionary (11 bits).
pub const WORDLIST_SIZE: u16 = 2048;

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Copy, Clone)]
pub struct WordIndex(pub u16);
impl WordIndex {
    pub fn new(idx: u16) -> Result<Self> {
        if idx >= WORDLIST_SIZE {
            Err(Error::WordOutOfBound(idx))
        } else {
            Ok(WordIndex(idx))
        }
    }

    pub fn to_word<D>(self, dic: &D) -> &'static str
    where
        D: dictionary::Language,
    {
        dic.word(self)
    }

    pub fn from_word<D>(dic: &D, word: &str) -> Result<Self>
    where
        D: dictionary::Language,
    {
        let idx = dic.index_of(word)?;
        Ok(idx)
    }
}

/// an ordered sequence of word indices of one of the supported
/// lengths.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Mnemonics(Vec<WordIndex>);

impl Mnemonics {
    pub fn size(&self) -> EntropySize {
        EntropySize::from_word_count(self.0.len()).expect("constructed with a supported length")
    }

    pub fn indices(&self) -> &[WordIndex] {
        &self.0
    }

    pub fn from_indices(indices: Vec<WordIndex>) -> Result<Self> {
        let _ = EntropySize::from_word_count(indices.len())?;
        Ok(Mnemonics(indices))
    }

    pub fn from_string<D>(dic: &D, phrase: &str) -> Result<Self>
    where
        D: dictionary::Language,
    {
        let mut indices = Vec::new();
        for word in phrase.split_whitespace() {
            indices.push(WordIndex::from_word(dic, word)?);
        }
        Mnemonics::from_indices(indices)
    }

    pub fn to_string<D>(&self, dic: &D) -> MnemonicString
    where
        D: dictionary::Language,
    {
        let mut phrase = String::new();
        let mut first = true;
        for w in self.0.iter() {
            if first {
                first = false;
            } else {
                phrase.push(' ');
            }
            phrase.push_str(w.to_word(dic));
        }
        MnemonicString(phrase)
    }
}

/// A phrase whose words have all been checked against a dictionary.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone)]
pub struct MnemonicString(String);
impl MnemonicString {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// validate every word of `phrase` against the dictionary.
    pub fn new<D>(dic: &D, phrase: String) -> Result<Self>
    where
        D: dictionary::Language,
    {
        let _ = Mnemonics::from_string(dic, phrase.as_str())?;
        Ok(MnemonicString(phrase))
    }
}
impl fmt::Display for MnemonicString {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// generate a fresh random phrase using the operating system RNG.
pub fn generate<D>(size: EntropySize, dic: &D) -> MnemonicString
where
    D: dictionary::Language,
{
    let mut bytes = vec![0u8; size.bytes()];
    OsRng.fill_bytes(&mut bytes);
    let entropy = Entropy::from_slice(&bytes).expect("size is one of the supported sizes");
    entropy.to_mnemonics().to_string(dic)
}

pub const SEED_SIZE: usize = 64;

/// the 64 byte seed stretched out of a phrase. Purely a function of
/// the phrase and passphrase.
pub struct Seed([u8; SEED_SIZE]);
impl Seed {
    /// create a Seed by taking ownership of the given array
    pub fn from_bytes(buf: [u8; SEED_SIZE]) -> Self {
        Seed(buf)
    }

    /// create a Seed by copying the given slice into a new array
    ///
    /// ```
    /// use baccore::bip39::{Seed, SEED_SIZE};
    ///
    /// let bytes = [0u8; SEED_SIZE];
    /// let wrong = [0u8; 31];
    ///
    /// assert!(Seed::from_slice(&wrong[..]).is_err());
    /// assert!(Seed::from_slice(&bytes[..]).is_ok());
    /// ```
    pub fn from_slice(buf: &[u8]) -> Result<Self> {
        if buf.len() != SEED_SIZE {
            return Err(Error::InvalidSeedSize(buf.len()));
        }
        let mut v = [0u8; SEED_SIZE];
        v[..].clone_from_slice(buf);
        Ok(Seed::from_bytes(v))
    }

    /// stretch a phrase and passphrase into a seed: PBKDF2 over
    /// HMAC-SHA512, 2048 iterations, with both the phrase and the
    /// literal `"mnemonic" + passphrase` salt NFKD normalized first.
    pub fn from_mnemonic_string(mnemonics: &MnemonicString, passphrase: &str) -> Self {
        let phrase: String = mnemonics.as_str().nfkd().collect();
        let salt: String = format!("mnemonic{}", passphrase).nfkd().collect();
        let mut result = [0; SEED_SIZE];
        hash::pbkdf2_hmac_sha512(phrase.as_bytes(), salt.as_bytes(), 2048, &mut result);
        Self::from_bytes(result)
    }
}
impl PartialEq for Seed {
    fn eq(&self, other: &Self) -> bool {
        self.0.as_ref() == other.0.as_ref()
    }
}
impl fmt::Debug for Seed {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", hex::encode(&self.0[..]))
    }
}
impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", hex::encode(&self.0[..]))
    }
}
impl AsRef<[u8]> for Seed {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

pub mod dictionary {
    //! the word dictionaries a phrase is spelled in.
    //!
    //! The standard 2048 word English list is carried by the `bip39`
    //! crate; this module only wraps it behind the [`Language`] trait.

    use std::{fmt, result};

    use super::WordIndex;
    use bip39_dict;

    #[derive(Debug, PartialEq, Eq, Clone)]
    pub enum Error {
        WordNotFound(String),
    }
    impl fmt::Display for Error {
        fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
            match self {
                &Error::WordNotFound(ref s) => {
                    write!(f, "word not found in the dictionary: \"{}\"", s)
                }
            }
        }
    }

    pub type Result<T> = result::Result<T, Error>;

    pub trait Language {
        fn index_of(&self, word: &str) -> Result<WordIndex>;
        fn word(&self, index: WordIndex) -> &'static str;
    }

    pub struct English;

    impl English {
        fn words(&self) -> &'static [&'static str; 2048] {
            bip39_dict::Language::English.word_list()
        }
    }

    impl Language for English {
        fn index_of(&self, word: &str) -> Result<WordIndex> {
            // the English list is sorted, so a binary search suffices
            match self.words().binary_search(&word) {
                Err(_) => Err(Error::WordNotFound(word.to_string())),
                Ok(idx) => Ok(WordIndex::new(idx as u16).expect("dictionary has 2048 entries")),
            }
        }
        fn word(&self, index: WordIndex) -> &'static str {
            self.words()[index.0 as usize]
        }
    }

    pub const ENGLISH: English = English;
}

#[cfg(test)]
mod test {
    use super::dictionary::Language;
    use super::*;

    #[test]
    fn english_dic() {
        let dic = &dictionary::ENGLISH;

        assert_eq!(dic.index_of("abandon"), Ok(WordIndex(0)));
        assert_eq!(dic.index_of("crack"), Ok(WordIndex(398)));
        assert_eq!(dic.index_of("shell"), Ok(WordIndex(1579)));
        assert_eq!(dic.index_of("zoo"), Ok(WordIndex(2047)));
        assert!(dic.index_of("mnemonic").is_err());

        assert_eq!(dic.word(WordIndex(0)), "abandon");
        assert_eq!(dic.word(WordIndex(398)), "crack");
        assert_eq!(dic.word(WordIndex(1579)), "shell");
        assert_eq!(dic.word(WordIndex(2047)), "zoo");
    }

    #[test]
    fn word_counts() {
        // L bytes of entropy make (L*8 + L*8/32) / 11 words, for every
        // multiple of 32 bits from 128 up to 512
        for &(bytes, words) in [
            (16, 12),
            (20, 15),
            (24, 18),
            (28, 21),
            (32, 24),
            (36, 27),
            (48, 36),
            (64, 48),
        ]
        .iter()
        {
            let size = EntropySize::from_bits(bytes * 8).unwrap();
            assert_eq!(size.word_count(), words);
            assert_eq!(size.word_count(), (bytes * 8 + bytes * 8 / 32) / 11);
            assert_eq!(EntropySize::from_word_count(words).unwrap(), size);
            let entropy = Entropy::from_slice(&vec![0x42u8; bytes]).unwrap();
            assert_eq!(entropy.to_mnemonics().indices().len(), words);
        }
    }

    #[test]
    fn unsupported_entropy_sizes() {
        // below the minimum, not a multiple of 32 bits, above the
        // maximum
        assert!(Entropy::from_slice(&[0u8; 15]).is_err());
        assert!(Entropy::from_slice(&[0u8; 17]).is_err());
        assert!(Entropy::from_slice(&[0u8; 68]).is_err());
        assert!(EntropySize::from_word_count(11).is_err());
        assert!(EntropySize::from_word_count(51).is_err());
    }

    #[test]
    fn mnemonic_zero() {
        let entropy = Entropy::from_slice(&[0u8; 16]).unwrap();
        let mnemonics = entropy.to_mnemonics();
        let entropy2 = Entropy::from_mnemonics(&mnemonics).unwrap();
        assert_eq!(entropy, entropy2);
    }

    #[test]
    fn mnemonic_7f() {
        let entropy = Entropy::from_slice(&[0x7fu8; 16]).unwrap();
        let mnemonics = entropy.to_mnemonics();
        let entropy2 = Entropy::from_mnemonics(&mnemonics).unwrap();
        assert_eq!(entropy, entropy2);
    }

    #[test]
    fn from_mnemonic_to_mnemonic() {
        for bits in (MIN_ENTROPY_BITS..MAX_ENTROPY_BITS + 1).step_by(32) {
            let size = EntropySize::from_bits(bits).unwrap();
            let entropy = Entropy::generate(size, rand::random);
            let mnemonics = entropy.to_mnemonics();
            let entropy2 = Entropy::from_mnemonics(&mnemonics).unwrap();
            assert_eq!(entropy, entropy2);
        }
    }

    #[test]
    fn mnemonic_288_bits() {
        // sizes above 256 bits carry more than 8 checksum bits
        let entropy = Entropy::from_slice(&[0x42u8; 36]).unwrap();
        assert_eq!(entropy.size().checksum_bits(), 9);
        let mnemonics = entropy.to_mnemonics();
        assert_eq!(mnemonics.indices().len(), 27);
        let entropy2 = Entropy::from_mnemonics(&mnemonics).unwrap();
        assert_eq!(entropy, entropy2);
    }

    #[test]
    fn mnemonic_512_bits() {
        let entropy = Entropy::from_slice(&[0x42u8; 64]).unwrap();
        assert_eq!(entropy.size().checksum_bits(), 16);
        let mnemonics = entropy.to_mnemonics();
        assert_eq!(mnemonics.indices().len(), 48);
        let entropy2 = Entropy::from_mnemonics(&mnemonics).unwrap();
        assert_eq!(entropy, entropy2);
    }

    #[test]
    fn invalid_checksum_is_rejected() {
        // "abandon" times 12 carries checksum bits 0b0000, but the
        // checksum of 16 zero bytes is not zero
        let mnemonics =
            Mnemonics::from_indices(vec![WordIndex(0); 12]).unwrap();
        match Entropy::from_mnemonics(&mnemonics) {
            Err(Error::InvalidChecksum(_, 0)) => (),
            other => panic!("expected invalid checksum, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn generate_word_count() {
        let phrase = generate(EntropySize::default(), &dictionary::ENGLISH);
        assert_eq!(phrase.as_str().split_whitespace().count(), 12);
        // and every word of the generated phrase validates
        assert!(MnemonicString::new(&dictionary::ENGLISH, phrase.as_str().to_string()).is_ok());
    }

    struct TestVector {
        entropy: &'static str,
        mnemonics: &'static str,
        seed: &'static str,
    }

    fn mk_test(test: &'static TestVector) {
        let mnemonics_str = MnemonicString::new(&dictionary::ENGLISH, test.mnemonics.to_owned())
            .expect("valid mnemonics string");
        let mnemonics_ref = Mnemonics::from_string(&dictionary::ENGLISH, test.mnemonics)
            .expect("valid mnemonics");
        let entropy_ref = Entropy::from_slice(&hex::decode(test.entropy).unwrap())
            .expect("decode entropy from hex");
        let seed_ref =
            Seed::from_slice(&hex::decode(test.seed).unwrap()).expect("decode seed from hex");

        assert_eq!(mnemonics_ref.size(), entropy_ref.size());
        assert_eq!(entropy_ref.to_mnemonics(), mnemonics_ref);
        assert_eq!(
            entropy_ref,
            Entropy::from_mnemonics(&mnemonics_ref).expect("retrieve entropy from mnemonics")
        );
        assert_eq!(seed_ref, Seed::from_mnemonic_string(&mnemonics_str, "TREZOR"));
    }

    #[test]
    fn test_vectors() {
        for test in TEST_VECTORS {
            mk_test(test);
        }
    }

    #[test]
    fn empty_passphrase_seed() {
        let phrase = MnemonicString::new(
            &dictionary::ENGLISH,
            "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about".to_string(),
        )
        .unwrap();
        let seed = Seed::from_mnemonic_string(&phrase, "");
        assert_eq!(
            hex::encode(seed.as_ref()),
            "5eb00bbddcf069084889a8ab9155568165f5c453ccb85e70811aaed6f6da5fc1\
             9a5ac40b389cd370d086206dec8aa6c43daea6690f20ad3d8d48b2d2ce9e38e4"
        );
    }

    const TEST_VECTORS: &'static [TestVector] = &[
        TestVector {
            entropy: "00000000000000000000000000000000",
            mnemonics: "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about",
            seed: "c55257c360c07c72029aebc1b53c05ed0362ada38ead3e3e9efa3708e53495531f09a6987599d18264c1e1c92f2cf141630c7a3c4ab7c81b2f001698e7463b04",
        },
        TestVector {
            entropy: "7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f7f",
            mnemonics: "legal winner thank year wave sausage worth useful legal winner thank yellow",
            seed: "2e8905819b8723fe2c1d161860e5ee1830318dbf49a83bd451cfb8440c28bd6fa457fe1296106559a3c80937a1c1069be3a3a5bd381ee6260e8d9739fce1f607",
        },
        TestVector {
            entropy: "ffffffffffffffffffffffffffffffff",
            mnemonics: "zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo wrong",
            seed: "ac27495480225222079d7be181583751e86f571027b0497b5b5d11218e0a8a13332572917f0f8e5a589620c6f15b11c61dee327651a14c34e18231052e48c069",
        },
        TestVector {
            entropy: "808080808080808080808080808080808080808080808080",
            mnemonics: "letter advice cage absurd amount doctor acoustic avoid letter advice cage absurd amount doctor acoustic avoid letter always",
            seed: "107d7c02a5aa6f38c58083ff74f04c607c2d2c0ecc55501dadd72d025b751bc27fe913ffb796f841c49b1d33b610cf0e91d3aa239027f5e99fe4ce9e5088cd65",
        },
        TestVector {
            entropy: "0000000000000000000000000000000000000000000000000000000000000000",
            mnemonics: "abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon art",
            seed: "bda85446c68413707090a52022edd26a1c9462295029f2e60cd7c4f2bbd3097170af7a4d73245cafa9c3cca8d561a7c3de6f5d4a10be8ed2a5e608d68f92fcc8",
        },
        TestVector {
            entropy: "ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff",
            mnemonics: "zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo zoo vote",
            seed: "dd48c104698c30cfe2b6142103248622fb7bb0ff692eebb00089b32d22484e1613912f0a5b694407be899ffd31ed3992c456cdf60f5d4564b8ba3f05a69890ad",
        },
        TestVector {
            entropy: "9e885d952ad362caeb4efe34a8e91bd2",
            mnemonics: "ozone drill grab fiber curtain grace pudding thank cruise elder eight picnic",
            seed: "274ddc525802f7c828d8ef7ddbcdc5304e87ac3535913611fbbfa986d0c9e5476c91689f9c8a54fd55bd38606aa6a8595ad213d4c9c9f9aca3fb217069a41028",
        },
        TestVector {
            entropy: "6d9be1ee6ebd27a258115aad99b7317b9c8d28b6d76431c3",
            mnemonics: "horn tenant knee talent sponsor spell gate clip pulse soap slush warm silver nephew swap uncle crack brave",
            seed: "fd579828af3da1d32544ce4db5c73d53fc8acc4ddb1e3b251a31179cdb71e853c56d2fcb11aed39898ce6c34b10b5382772db8796e52837b54468aeb312cfc3d",
        },
        TestVector {
            entropy: "68a79eaca2324873eacc50cb9c6eca8cc68ea5d936f98787c60c7ebc74e6ce7c",
            mnemonics: "hamster diagram private dutch cause delay private meat slide toddler razor book happy fancy gospel tennis maple dilemma loan word shrug inflict delay length",
            seed: "64c87cde7e12ecf6704ab95bb1408bef047c22db4cc7491c4271d170a1b213d20b385bc1588d9c7b38f1b39d415665b8a9030c9ec653d75e65f847d8fc1fc440",
        },
        TestVector {
            entropy: "f585c11aec520db57dd353c69554b21a89b20fb0650966fa0a9d6f74fd989d8f",
            mnemonics: "void come effort suffer camp survey warrior heavy shoot primary clutch crush open amazing screen patrol group space point ten exist slush involve unfold",
            seed: "01f5bced59dec48e362f2c45b5de68b9fd6c92c6634f44d6d40aab69056506f0e35524a518034ddc1192e1dacd32c1ed3eaa3c3b131c88ed8e7e54c49a5d0998",
        },
    ];
}
