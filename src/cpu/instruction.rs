//! Opcode decode tables.
//!
//! `Instruction::from_byte` is the single mapping from opcode bytes to
//! operation descriptors. Every defined opcode decodes to exactly one
//! variant; undefined primary bytes decode to `None` and become an
//! `UnknownOpcode` fault in the dispatcher. The regular blocks (the
//! register-to-register loads, the accumulator arithmetic row and the whole
//! CB-prefixed table) are decoded from the operand/operation bit fields
//! rather than enumerated byte by byte.

/// An 8-bit operand location for accumulator arithmetic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ByteTarget {
    A,
    B,
    C,
    D,
    E,
    H,
    L,
    HL,
    Imm8,
}

/// Source operand of `ADD HL, rr`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArithmeticHLTarget {
    BC,
    DE,
    HL,
    SP,
}

/// Operand of INC/DEC, covering both the 8-bit and 16-bit forms.
///
/// `HLREF` is the memory operand `(HL)`; `HL` is the register pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IncDecTarget {
    A,
    B,
    C,
    D,
    E,
    H,
    L,
    BC,
    DE,
    HL,
    SP,
    HLREF,
}

/// Branch condition of JP/JR/CALL/RET, plus the `JP HL` special case.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JumpTest {
    NotZero,
    Zero,
    NotCarry,
    Carry,
    Always,
    HL,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadByteTarget {
    A,
    B,
    C,
    D,
    E,
    H,
    L,
    HL,
    HLI,
    HLD,
    BC,
    DE,
    A8,
    A16,
    HiC,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadByteSource {
    A,
    B,
    C,
    D,
    E,
    H,
    L,
    HL,
    HLI,
    HLD,
    BC,
    DE,
    A8,
    A16,
    HiC,
    D8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadWordTarget {
    BC,
    DE,
    HL,
    SP,
    A16,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadWordSource {
    D16,
    SP,
    HL,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadType {
    Byte(LoadByteTarget, LoadByteSource),
    Word(LoadWordTarget, LoadWordSource),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StackTarget {
    BC,
    DE,
    HL,
    AF,
}

/// Operand of a CB-prefixed operation, in table order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PrefixTarget {
    B,
    C,
    D,
    E,
    H,
    L,
    HL,
    A,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Instruction {
    NOP,
    STOP,
    HALT,
    DI,
    EI,

    LD(LoadType),
    PUSH(StackTarget),
    POP(StackTarget),

    ADD(ByteTarget),
    ADC(ByteTarget),
    SUB(ByteTarget),
    SBC(ByteTarget),
    AND(ByteTarget),
    XOR(ByteTarget),
    OR(ByteTarget),
    CP(ByteTarget),
    ADDHL(ArithmeticHLTarget),
    ADDSP,
    LDHL,
    INC(IncDecTarget),
    DEC(IncDecTarget),
    DAA,
    CPL,
    SCF,
    CCF,

    JP(JumpTest),
    JR(JumpTest),
    CALL(JumpTest),
    RET(JumpTest),
    RETI,
    RST(u8),

    RLCA,
    RRCA,
    RLA,
    RRA,

    // CB-prefixed
    RLC(PrefixTarget),
    RRC(PrefixTarget),
    RL(PrefixTarget),
    RR(PrefixTarget),
    SLA(PrefixTarget),
    SRA(PrefixTarget),
    SWAP(PrefixTarget),
    SRL(PrefixTarget),
    BIT(u8, PrefixTarget),
    RES(u8, PrefixTarget),
    SET(u8, PrefixTarget),
}

/// Operand location selected by the low three bits of a regular-block
/// opcode: B, C, D, E, H, L, (HL), A.
fn prefix_target(index: u8) -> PrefixTarget {
    match index & 0x07 {
        0 => PrefixTarget::B,
        1 => PrefixTarget::C,
        2 => PrefixTarget::D,
        3 => PrefixTarget::E,
        4 => PrefixTarget::H,
        5 => PrefixTarget::L,
        6 => PrefixTarget::HL,
        _ => PrefixTarget::A,
    }
}

fn byte_target(index: u8) -> ByteTarget {
    match index & 0x07 {
        0 => ByteTarget::B,
        1 => ByteTarget::C,
        2 => ByteTarget::D,
        3 => ByteTarget::E,
        4 => ByteTarget::H,
        5 => ByteTarget::L,
        6 => ByteTarget::HL,
        _ => ByteTarget::A,
    }
}

fn load_byte_target(index: u8) -> LoadByteTarget {
    match index & 0x07 {
        0 => LoadByteTarget::B,
        1 => LoadByteTarget::C,
        2 => LoadByteTarget::D,
        3 => LoadByteTarget::E,
        4 => LoadByteTarget::H,
        5 => LoadByteTarget::L,
        6 => LoadByteTarget::HL,
        _ => LoadByteTarget::A,
    }
}

fn load_byte_source(index: u8) -> LoadByteSource {
    match index & 0x07 {
        0 => LoadByteSource::B,
        1 => LoadByteSource::C,
        2 => LoadByteSource::D,
        3 => LoadByteSource::E,
        4 => LoadByteSource::H,
        5 => LoadByteSource::L,
        6 => LoadByteSource::HL,
        _ => LoadByteSource::A,
    }
}

impl Instruction {
    /// Decode one opcode byte. `prefixed` selects the CB-prefixed table.
    pub fn from_byte(byte: u8, prefixed: bool) -> Option<Instruction> {
        if prefixed {
            Some(Instruction::from_byte_prefixed(byte))
        } else {
            Instruction::from_byte_not_prefixed(byte)
        }
    }

    /// The CB-prefixed table. All 256 bytes are defined.
    ///
    /// Bits 2..0 select the operand, bits 5..3 the rotate/shift operation
    /// (below 0x40) or the literal bit index (0x40 and above), bits 7..6
    /// pick BIT/RES/SET.
    fn from_byte_prefixed(byte: u8) -> Instruction {
        let target = prefix_target(byte);
        let bit = (byte >> 3) & 0x07;
        match byte >> 6 {
            0 => match bit {
                0 => Instruction::RLC(target),
                1 => Instruction::RRC(target),
                2 => Instruction::RL(target),
                3 => Instruction::RR(target),
                4 => Instruction::SLA(target),
                5 => Instruction::SRA(target),
                6 => Instruction::SWAP(target),
                _ => Instruction::SRL(target),
            },
            1 => Instruction::BIT(bit, target),
            2 => Instruction::RES(bit, target),
            _ => Instruction::SET(bit, target),
        }
    }

    fn from_byte_not_prefixed(byte: u8) -> Option<Instruction> {
        use Instruction::*;
        let instruction = match byte {
            0x00 => NOP,
            0x01 => LD(LoadType::Word(LoadWordTarget::BC, LoadWordSource::D16)),
            0x02 => LD(LoadType::Byte(LoadByteTarget::BC, LoadByteSource::A)),
            0x03 => INC(IncDecTarget::BC),
            0x04 => INC(IncDecTarget::B),
            0x05 => DEC(IncDecTarget::B),
            0x06 => LD(LoadType::Byte(LoadByteTarget::B, LoadByteSource::D8)),
            0x07 => RLCA,
            0x08 => LD(LoadType::Word(LoadWordTarget::A16, LoadWordSource::SP)),
            0x09 => ADDHL(ArithmeticHLTarget::BC),
            0x0A => LD(LoadType::Byte(LoadByteTarget::A, LoadByteSource::BC)),
            0x0B => DEC(IncDecTarget::BC),
            0x0C => INC(IncDecTarget::C),
            0x0D => DEC(IncDecTarget::C),
            0x0E => LD(LoadType::Byte(LoadByteTarget::C, LoadByteSource::D8)),
            0x0F => RRCA,

            0x10 => STOP,
            0x11 => LD(LoadType::Word(LoadWordTarget::DE, LoadWordSource::D16)),
            0x12 => LD(LoadType::Byte(LoadByteTarget::DE, LoadByteSource::A)),
            0x13 => INC(IncDecTarget::DE),
            0x14 => INC(IncDecTarget::D),
            0x15 => DEC(IncDecTarget::D),
            0x16 => LD(LoadType::Byte(LoadByteTarget::D, LoadByteSource::D8)),
            0x17 => RLA,
            0x18 => JR(JumpTest::Always),
            0x19 => ADDHL(ArithmeticHLTarget::DE),
            0x1A => LD(LoadType::Byte(LoadByteTarget::A, LoadByteSource::DE)),
            0x1B => DEC(IncDecTarget::DE),
            0x1C => INC(IncDecTarget::E),
            0x1D => DEC(IncDecTarget::E),
            0x1E => LD(LoadType::Byte(LoadByteTarget::E, LoadByteSource::D8)),
            0x1F => RRA,

            0x20 => JR(JumpTest::NotZero),
            0x21 => LD(LoadType::Word(LoadWordTarget::HL, LoadWordSource::D16)),
            0x22 => LD(LoadType::Byte(LoadByteTarget::HLI, LoadByteSource::A)),
            0x23 => INC(IncDecTarget::HL),
            0x24 => INC(IncDecTarget::H),
            0x25 => DEC(IncDecTarget::H),
            0x26 => LD(LoadType::Byte(LoadByteTarget::H, LoadByteSource::D8)),
            0x27 => DAA,
            0x28 => JR(JumpTest::Zero),
            0x29 => ADDHL(ArithmeticHLTarget::HL),
            0x2A => LD(LoadType::Byte(LoadByteTarget::A, LoadByteSource::HLI)),
            0x2B => DEC(IncDecTarget::HL),
            0x2C => INC(IncDecTarget::L),
            0x2D => DEC(IncDecTarget::L),
            0x2E => LD(LoadType::Byte(LoadByteTarget::L, LoadByteSource::D8)),
            0x2F => CPL,

            0x30 => JR(JumpTest::NotCarry),
            0x31 => LD(LoadType::Word(LoadWordTarget::SP, LoadWordSource::D16)),
            0x32 => LD(LoadType::Byte(LoadByteTarget::HLD, LoadByteSource::A)),
            0x33 => INC(IncDecTarget::SP),
            0x34 => INC(IncDecTarget::HLREF),
            0x35 => DEC(IncDecTarget::HLREF),
            0x36 => LD(LoadType::Byte(LoadByteTarget::HL, LoadByteSource::D8)),
            0x37 => SCF,
            0x38 => JR(JumpTest::Carry),
            0x39 => ADDHL(ArithmeticHLTarget::SP),
            0x3A => LD(LoadType::Byte(LoadByteTarget::A, LoadByteSource::HLD)),
            0x3B => DEC(IncDecTarget::SP),
            0x3C => INC(IncDecTarget::A),
            0x3D => DEC(IncDecTarget::A),
            0x3E => LD(LoadType::Byte(LoadByteTarget::A, LoadByteSource::D8)),
            0x3F => CCF,

            0x76 => HALT,
            // LD r, r' block; dst in bits 5..3, src in bits 2..0.
            0x40..=0x7F => LD(LoadType::Byte(
                load_byte_target(byte >> 3),
                load_byte_source(byte),
            )),

            // Accumulator arithmetic block; operation in bits 5..3.
            0x80..=0xBF => {
                let target = byte_target(byte);
                match (byte >> 3) & 0x07 {
                    0 => ADD(target),
                    1 => ADC(target),
                    2 => SUB(target),
                    3 => SBC(target),
                    4 => AND(target),
                    5 => XOR(target),
                    6 => OR(target),
                    _ => CP(target),
                }
            }

            0xC0 => RET(JumpTest::NotZero),
            0xC1 => POP(StackTarget::BC),
            0xC2 => JP(JumpTest::NotZero),
            0xC3 => JP(JumpTest::Always),
            0xC4 => CALL(JumpTest::NotZero),
            0xC5 => PUSH(StackTarget::BC),
            0xC6 => ADD(ByteTarget::Imm8),
            0xC7 => RST(0x00),
            0xC8 => RET(JumpTest::Zero),
            0xC9 => RET(JumpTest::Always),
            0xCA => JP(JumpTest::Zero),
            // 0xCB is the prefix byte, handled by the dispatcher.
            0xCC => CALL(JumpTest::Zero),
            0xCD => CALL(JumpTest::Always),
            0xCE => ADC(ByteTarget::Imm8),
            0xCF => RST(0x08),

            0xD0 => RET(JumpTest::NotCarry),
            0xD1 => POP(StackTarget::DE),
            0xD2 => JP(JumpTest::NotCarry),
            0xD4 => CALL(JumpTest::NotCarry),
            0xD5 => PUSH(StackTarget::DE),
            0xD6 => SUB(ByteTarget::Imm8),
            0xD7 => RST(0x10),
            0xD8 => RET(JumpTest::Carry),
            0xD9 => RETI,
            0xDA => JP(JumpTest::Carry),
            0xDC => CALL(JumpTest::Carry),
            0xDE => SBC(ByteTarget::Imm8),
            0xDF => RST(0x18),

            0xE0 => LD(LoadType::Byte(LoadByteTarget::A8, LoadByteSource::A)),
            0xE1 => POP(StackTarget::HL),
            0xE2 => LD(LoadType::Byte(LoadByteTarget::HiC, LoadByteSource::A)),
            0xE5 => PUSH(StackTarget::HL),
            0xE6 => AND(ByteTarget::Imm8),
            0xE7 => RST(0x20),
            0xE8 => ADDSP,
            0xE9 => JP(JumpTest::HL),
            0xEA => LD(LoadType::Byte(LoadByteTarget::A16, LoadByteSource::A)),
            0xEE => XOR(ByteTarget::Imm8),
            0xEF => RST(0x28),

            0xF0 => LD(LoadType::Byte(LoadByteTarget::A, LoadByteSource::A8)),
            0xF1 => POP(StackTarget::AF),
            0xF2 => LD(LoadType::Byte(LoadByteTarget::A, LoadByteSource::HiC)),
            0xF3 => DI,
            0xF5 => PUSH(StackTarget::AF),
            0xF6 => OR(ByteTarget::Imm8),
            0xF7 => RST(0x30),
            0xF8 => LDHL,
            0xF9 => LD(LoadType::Word(LoadWordTarget::SP, LoadWordSource::HL)),
            0xFA => LD(LoadType::Byte(LoadByteTarget::A, LoadByteSource::A16)),
            0xFB => EI,
            0xFE => CP(ByteTarget::Imm8),
            0xFF => RST(0x38),

            // 0xCB never reaches decode as a standalone instruction; the
            // remaining bytes are undefined on this CPU.
            _ => return None,
        };
        Some(instruction)
    }
}
