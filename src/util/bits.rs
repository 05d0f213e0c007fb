//! bit packing of 11 bit blocks, as used by the mnemonic encoding.
//!
//! A mnemonic word indexes a 2048 entry dictionary, i.e. carries exactly
//! 11 bits. The writer packs a sequence of such indices into bytes
//! MSB-first, padding the final partial byte with zero bits; the reader
//! performs the inverse.

const NUM_BITS_PER_BLOCK: u32 = 11;

pub struct BitWriter11 {
    buffer: Vec<u8>,
    acc: u32,
    bits: u32,
}

impl BitWriter11 {
    pub fn new() -> Self {
        BitWriter11 {
            buffer: Vec::new(),
            acc: 0,
            bits: 0,
        }
    }

    /// append the 11 low bits of `e`, most significant bit first.
    pub fn write(&mut self, e: u16) {
        self.acc = (self.acc << NUM_BITS_PER_BLOCK) | (e as u32 & 0b0111_1111_1111);
        self.bits += NUM_BITS_PER_BLOCK;
        while self.bits >= 8 {
            self.bits -= 8;
            self.buffer.push((self.acc >> self.bits) as u8);
        }
    }

    /// flush the remaining bits (zero padded on the right) and return
    /// the packed bytes.
    pub fn to_bytes(mut self) -> Vec<u8> {
        if self.bits > 0 {
            let b = (self.acc << (8 - self.bits)) as u8;
            self.buffer.push(b);
        }
        self.buffer
    }
}

pub struct BitReader11<'a> {
    buffer: &'a [u8],
    acc: u32,
    bits: u32,
}

impl<'a> BitReader11<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        BitReader11 {
            buffer: bytes,
            acc: 0,
            bits: 0,
        }
    }

    /// number of full 11 bit blocks still available.
    pub fn size(&self) -> usize {
        (self.buffer.len() * 8 + self.bits as usize) / NUM_BITS_PER_BLOCK as usize
    }

    /// read the next 11 bit block. Panics if fewer than 11 bits remain;
    /// callers are expected to check `size` beforehand.
    pub fn read(&mut self) -> u16 {
        while self.bits < NUM_BITS_PER_BLOCK {
            assert!(!self.buffer.is_empty(), "not enough bits to read a full block");
            self.acc = (self.acc << 8) | self.buffer[0] as u32;
            self.bits += 8;
            self.buffer = &self.buffer[1..];
        }
        self.bits -= NUM_BITS_PER_BLOCK;
        let block = (self.acc >> self.bits) & 0b0111_1111_1111;
        self.acc &= (1 << self.bits) - 1;
        block as u16
    }
}
