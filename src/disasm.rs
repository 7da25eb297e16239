//! One-instruction disassembler for trace sinks.
//!
//! Reads go through a caller-supplied closure so the formatting can never
//! disturb emulated state (pass a closure over an immutable view, not the
//! live bus, if reads have side effects).

const R8: [&str; 8] = ["B", "C", "D", "E", "H", "L", "(HL)", "A"];
const R16: [&str; 4] = ["BC", "DE", "HL", "SP"];
const R16_STACK: [&str; 4] = ["BC", "DE", "HL", "AF"];
const CONDITIONS: [&str; 4] = ["NZ", "Z", "NC", "C"];
const ALU: [&str; 8] = [
    "ADD A,", "ADC A,", "SUB ", "SBC A,", "AND ", "XOR ", "OR ", "CP ",
];
const ROTATES: [&str; 8] = ["RLC", "RRC", "RL", "RR", "SLA", "SRA", "SWAP", "SRL"];

/// Disassemble the instruction at `addr`. Returns the mnemonic and the
/// number of bytes the instruction occupies.
pub fn disassemble<F: Fn(u16) -> u8>(addr: u16, read: F) -> (String, u8) {
    let opcode = read(addr);
    if opcode == 0xCB {
        return (disassemble_cb(read(addr.wrapping_add(1))), 2);
    }

    let d8 = || read(addr.wrapping_add(1));
    let d16 = || (read(addr.wrapping_add(2)) as u16) << 8 | read(addr.wrapping_add(1)) as u16;

    let row = |mask: u8, value: u8| opcode & mask == value;
    let rr = ((opcode >> 4) & 0x03) as usize;
    let mid = ((opcode >> 3) & 0x07) as usize;
    let cc = ((opcode >> 3) & 0x03) as usize;
    let low = (opcode & 0x07) as usize;

    match opcode {
        0x00 => ("NOP".into(), 1),
        0x10 => ("STOP".into(), 2),
        0x07 => ("RLCA".into(), 1),
        0x0F => ("RRCA".into(), 1),
        0x17 => ("RLA".into(), 1),
        0x1F => ("RRA".into(), 1),
        0x27 => ("DAA".into(), 1),
        0x2F => ("CPL".into(), 1),
        0x37 => ("SCF".into(), 1),
        0x3F => ("CCF".into(), 1),
        0x08 => (format!("LD (${:04X}),SP", d16()), 3),
        0x02 => ("LD (BC),A".into(), 1),
        0x12 => ("LD (DE),A".into(), 1),
        0x22 => ("LD (HL+),A".into(), 1),
        0x32 => ("LD (HL-),A".into(), 1),
        0x0A => ("LD A,(BC)".into(), 1),
        0x1A => ("LD A,(DE)".into(), 1),
        0x2A => ("LD A,(HL+)".into(), 1),
        0x3A => ("LD A,(HL-)".into(), 1),
        0x18 => (format!("JR ${:02X}", d8()), 2),
        _ if row(0xE7, 0x20) => (format!("JR {},${:02X}", CONDITIONS[cc], d8()), 2),
        _ if row(0xCF, 0x01) => (format!("LD {},${:04X}", R16[rr], d16()), 3),
        _ if row(0xCF, 0x03) => (format!("INC {}", R16[rr]), 1),
        _ if row(0xCF, 0x0B) => (format!("DEC {}", R16[rr]), 1),
        _ if row(0xCF, 0x09) => (format!("ADD HL,{}", R16[rr]), 1),
        _ if row(0xC7, 0x04) => (format!("INC {}", R8[mid]), 1),
        _ if row(0xC7, 0x05) => (format!("DEC {}", R8[mid]), 1),
        _ if row(0xC7, 0x06) => (format!("LD {},${:02X}", R8[mid], d8()), 2),

        0x76 => ("HALT".into(), 1),
        0x40..=0x7F => (format!("LD {},{}", R8[mid], R8[low]), 1),
        0x80..=0xBF => (format!("{}{}", ALU[mid], R8[low]), 1),

        0xC3 => (format!("JP ${:04X}", d16()), 3),
        0xC9 => ("RET".into(), 1),
        0xD9 => ("RETI".into(), 1),
        0xCD => (format!("CALL ${:04X}", d16()), 3),
        0xE0 => (format!("LDH (${:02X}),A", d8()), 2),
        0xF0 => (format!("LDH A,(${:02X})", d8()), 2),
        0xE2 => ("LD (C),A".into(), 1),
        0xF2 => ("LD A,(C)".into(), 1),
        0xE8 => (format!("ADD SP,${:02X}", d8()), 2),
        0xF8 => (format!("LD HL,SP+${:02X}", d8()), 2),
        0xE9 => ("JP HL".into(), 1),
        0xF9 => ("LD SP,HL".into(), 1),
        0xEA => (format!("LD (${:04X}),A", d16()), 3),
        0xFA => (format!("LD A,(${:04X})", d16()), 3),
        0xF3 => ("DI".into(), 1),
        0xFB => ("EI".into(), 1),
        _ if row(0xE7, 0xC0) => (format!("RET {}", CONDITIONS[cc]), 1),
        _ if row(0xE7, 0xC2) => (format!("JP {},${:04X}", CONDITIONS[cc], d16()), 3),
        _ if row(0xE7, 0xC4) => (format!("CALL {},${:04X}", CONDITIONS[cc], d16()), 3),
        _ if row(0xCF, 0xC1) => (format!("POP {}", R16_STACK[rr]), 1),
        _ if row(0xCF, 0xC5) => (format!("PUSH {}", R16_STACK[rr]), 1),
        _ if row(0xC7, 0xC6) => (format!("{}${:02X}", ALU[mid], d8()), 2),
        _ if row(0xC7, 0xC7) => (format!("RST ${:02X}", opcode & 0x38), 1),

        // Undefined bytes render as raw data.
        _ => (format!("DB ${:02X}", opcode), 1),
    }
}

fn disassemble_cb(byte: u8) -> String {
    let operand = R8[(byte & 0x07) as usize];
    let bit = (byte >> 3) & 0x07;
    match byte >> 6 {
        0 => format!("{} {}", ROTATES[bit as usize], operand),
        1 => format!("BIT {},{}", bit, operand),
        2 => format!("RES {},{}", bit, operand),
        _ => format!("SET {},{}", bit, operand),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn disasm(bytes: &[u8]) -> (String, u8) {
        disassemble(0, |addr| bytes[addr as usize])
    }

    #[test]
    fn test_simple_opcodes() {
        assert_eq!(disasm(&[0x00]), ("NOP".into(), 1));
        assert_eq!(disasm(&[0x76]), ("HALT".into(), 1));
        assert_eq!(disasm(&[0xC9]), ("RET".into(), 1));
        assert_eq!(disasm(&[0x87]), ("ADD A,A".into(), 1));
        assert_eq!(disasm(&[0x6E]), ("LD L,(HL)".into(), 1));
    }

    #[test]
    fn test_operand_formatting() {
        assert_eq!(disasm(&[0x3E, 0x42]), ("LD A,$42".into(), 2));
        assert_eq!(disasm(&[0xC3, 0x50, 0x01]), ("JP $0150".into(), 3));
        assert_eq!(disasm(&[0x20, 0xFE]), ("JR NZ,$FE".into(), 2));
        assert_eq!(disasm(&[0x08, 0xCD, 0xAB]), ("LD ($ABCD),SP".into(), 3));
        assert_eq!(disasm(&[0xFF]), ("RST $38".into(), 1));
    }

    #[test]
    fn test_cb_prefixed() {
        assert_eq!(disasm(&[0xCB, 0x00]), ("RLC B".into(), 2));
        assert_eq!(disasm(&[0xCB, 0x7E]), ("BIT 7,(HL)".into(), 2));
        assert_eq!(disasm(&[0xCB, 0xC7]), ("SET 0,A".into(), 2));
        assert_eq!(disasm(&[0xCB, 0x36]), ("SWAP (HL)".into(), 2));
    }

    #[test]
    fn test_undefined_bytes_render_as_data() {
        assert_eq!(disasm(&[0xD3]), ("DB $D3".into(), 1));
        assert_eq!(disasm(&[0xED]), ("DB $ED".into(), 1));
    }
}
