//! The CPU core: fetch/decode/execute, interrupt and halt control, and
//! machine-cycle accounting.
//!
//! One call to [`Cpu::step`] executes exactly one instruction (or services
//! one interrupt, or idles for one cycle while halted) to completion. The
//! host is expected to catch peripherals up to [`Cpu::cycle_count`] between
//! steps.

pub mod instruction;
pub mod registers;

mod alu;

use thiserror::Error;

use crate::memory::Memory;
use crate::trace::{StepSnapshot, Tracer};
use instruction::{
    ArithmeticHLTarget, ByteTarget, IncDecTarget, Instruction, JumpTest, LoadByteSource,
    LoadByteTarget, LoadType, LoadWordSource, LoadWordTarget, PrefixTarget, StackTarget,
};
use registers::Registers;

/// Cost of an interrupt dispatch, charged by the step that delivers it.
const INTERRUPT_DISPATCH_CYCLES: u32 = 5;

/// A fatal decode failure. No processor state is mutated when `step`
/// reports one; the host must stop dispatching further steps.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum Fault {
    #[error("unknown opcode {opcode:#04x} at {pc:#06x} after {cycles} cycles")]
    UnknownOpcode { opcode: u8, pc: u16, cycles: u64 },
}

/// The processor context: register file, execution state, pending
/// interrupts and the cycle counter. Hosts construct one per machine;
/// tests construct as many as they need.
pub struct Cpu {
    pub registers: Registers,
    pub pc: u16,
    pub sp: u16,
    /// Global interrupt enable (IME).
    pub ime: bool,
    pub halted: bool,
    ei_pending: bool,
    cycles: u64,
    pending_interrupts: Vec<u16>,
    tracer: Option<Tracer>,
}

impl Cpu {
    /// A CPU in the documented power-on state.
    pub fn new() -> Self {
        let mut cpu = Cpu {
            registers: Registers::default(),
            pc: 0,
            sp: 0,
            ime: false,
            halted: false,
            ei_pending: false,
            cycles: 0,
            pending_interrupts: Vec::new(),
            tracer: None,
        };
        cpu.reset();
        cpu
    }

    /// Restore the power-on register state: AF=0x01B0, BC=0x0013,
    /// DE=0x00D8, HL=0x014D, SP=0xFFFE, PC=0x0100, zero cycles, interrupts
    /// disabled with none pending. An attached tracer survives the reset.
    pub fn reset(&mut self) {
        self.registers.set_af(0x01B0);
        self.registers.set_bc(0x0013);
        self.registers.set_de(0x00D8);
        self.registers.set_hl(0x014D);
        self.sp = 0xFFFE;
        self.pc = 0x0100;
        self.ime = false;
        self.halted = false;
        self.ei_pending = false;
        self.cycles = 0;
        self.pending_interrupts.clear();
    }

    /// Total machine cycles executed since power-on or the last `reset`.
    pub fn cycle_count(&self) -> u64 {
        self.cycles
    }

    /// Mark an interrupt pending. Dispatch happens at the next step
    /// boundary once interrupts are enabled; the lowest vector wins when
    /// several are pending. Requesting an already-pending vector is a
    /// no-op.
    pub fn request_interrupt(&mut self, vector: u16) {
        if !self.pending_interrupts.contains(&vector) {
            self.pending_interrupts.push(vector);
        }
    }

    pub fn interrupts_pending(&self) -> bool {
        !self.pending_interrupts.is_empty()
    }

    /// Install the instrumentation hook, replacing any previous one.
    pub fn attach_tracer(&mut self, tracer: Tracer) {
        self.tracer = Some(tracer);
    }

    pub fn detach_tracer(&mut self) -> Option<Tracer> {
        self.tracer.take()
    }

    /// Execute one instruction and return its machine-cycle cost.
    ///
    /// If an enabled interrupt is pending, this step delivers it instead of
    /// executing an instruction. While halted, each step costs one cycle
    /// and leaves PC untouched. An undefined opcode reports
    /// [`Fault::UnknownOpcode`] without committing any state change.
    pub fn step<M: Memory>(&mut self, memory: &mut M) -> Result<u32, Fault> {
        if let Some(cycles) = self.service_interrupts(memory) {
            self.cycles += cycles as u64;
            return Ok(cycles);
        }

        if self.halted {
            self.cycles += 1;
            return Ok(1);
        }

        let mut opcode = memory.read_byte(self.pc);
        let prefixed = opcode == 0xCB;
        if prefixed {
            opcode = memory.read_byte(self.pc.wrapping_add(1));
        }

        let instruction = match Instruction::from_byte(opcode, prefixed) {
            Some(instruction) => instruction,
            None => {
                log::warn!("unknown opcode {:#04x} at {:#06x}", opcode, self.pc);
                return Err(Fault::UnknownOpcode {
                    opcode,
                    pc: self.pc,
                    cycles: self.cycles,
                });
            }
        };

        // EI takes effect after the instruction that follows it.
        if self.ei_pending {
            self.ei_pending = false;
            self.ime = true;
        }

        if let Some(tracer) = self.tracer.as_mut() {
            tracer.observe(&StepSnapshot {
                pc: self.pc,
                opcode,
                prefixed,
                registers: self.registers,
                sp: self.sp,
                cycles: self.cycles,
            });
        }

        let (next_pc, cycles) = self.execute(memory, instruction);
        self.pc = next_pc;
        self.cycles += cycles as u64;
        Ok(cycles)
    }

    /// Deliver the highest-priority pending interrupt if IME is set.
    ///
    /// Delivery clears the halted state, pushes PC, jumps to the vector and
    /// disables further interrupts until re-enabled by EI or RETI.
    fn service_interrupts<M: Memory>(&mut self, memory: &mut M) -> Option<u32> {
        if !self.ime || self.pending_interrupts.is_empty() {
            return None;
        }

        let index = self
            .pending_interrupts
            .iter()
            .enumerate()
            .min_by_key(|(_, &vector)| vector)
            .map(|(index, _)| index)?;
        let vector = self.pending_interrupts.swap_remove(index);

        log::debug!(
            "interrupt dispatch to {:#06x} from {:#06x}",
            vector,
            self.pc
        );

        self.halted = false;
        self.ime = false;
        self.sp = self.sp.wrapping_sub(2);
        memory.write_word(self.sp, self.pc);
        self.pc = vector;

        Some(INTERRUPT_DISPATCH_CYCLES)
    }

    /// Read an arithmetic operand. Returns the value and how many bytes the
    /// instruction occupies.
    fn resolve_byte_target<M: Memory>(&mut self, memory: &mut M, target: ByteTarget) -> (u8, u16) {
        match target {
            ByteTarget::A => (self.registers.a, 1),
            ByteTarget::B => (self.registers.b, 1),
            ByteTarget::C => (self.registers.c, 1),
            ByteTarget::D => (self.registers.d, 1),
            ByteTarget::E => (self.registers.e, 1),
            ByteTarget::H => (self.registers.h, 1),
            ByteTarget::L => (self.registers.l, 1),
            ByteTarget::HL => (memory.read_byte(self.registers.get_hl()), 1),
            ByteTarget::Imm8 => (self.read_next_byte(memory), 2),
        }
    }

    fn read_prefix_target<M: Memory>(&mut self, memory: &mut M, target: PrefixTarget) -> u8 {
        match target {
            PrefixTarget::A => self.registers.a,
            PrefixTarget::B => self.registers.b,
            PrefixTarget::C => self.registers.c,
            PrefixTarget::D => self.registers.d,
            PrefixTarget::E => self.registers.e,
            PrefixTarget::H => self.registers.h,
            PrefixTarget::L => self.registers.l,
            PrefixTarget::HL => memory.read_byte(self.registers.get_hl()),
        }
    }

    fn write_prefix_target<M: Memory>(&mut self, memory: &mut M, target: PrefixTarget, value: u8) {
        match target {
            PrefixTarget::A => self.registers.a = value,
            PrefixTarget::B => self.registers.b = value,
            PrefixTarget::C => self.registers.c = value,
            PrefixTarget::D => self.registers.d = value,
            PrefixTarget::E => self.registers.e = value,
            PrefixTarget::H => self.registers.h = value,
            PrefixTarget::L => self.registers.l = value,
            PrefixTarget::HL => memory.write_byte(self.registers.get_hl(), value),
        }
    }

    fn condition_met(&self, test: JumpTest) -> bool {
        match test {
            JumpTest::NotZero => !self.registers.f.zero,
            JumpTest::Zero => self.registers.f.zero,
            JumpTest::NotCarry => !self.registers.f.carry,
            JumpTest::Carry => self.registers.f.carry,
            JumpTest::Always => true,
            // JP is the only instruction decoded with an HL target and it
            // is handled before conditions are evaluated.
            JumpTest::HL => unreachable!("JP HL does not test a condition"),
        }
    }

    /// Apply one decoded instruction. Returns the next PC and the
    /// machine-cycle cost.
    ///
    /// Sequential instructions return `pc + length`; control transfers
    /// return their target address. PC is assigned exclusively from this
    /// return value, so a branch can never also be advanced sequentially.
    fn execute<M: Memory>(&mut self, memory: &mut M, instruction: Instruction) -> (u16, u32) {
        match instruction {
            Instruction::NOP => (self.pc.wrapping_add(1), 1),
            // STOP carries a padding byte.
            Instruction::STOP => (self.pc.wrapping_add(2), 1),
            Instruction::HALT => {
                self.halted = true;
                (self.pc.wrapping_add(1), 1)
            }
            Instruction::DI => {
                self.ime = false;
                self.ei_pending = false;
                (self.pc.wrapping_add(1), 1)
            }
            Instruction::EI => {
                self.ei_pending = true;
                (self.pc.wrapping_add(1), 1)
            }

            Instruction::ADD(target) => {
                let (value, length) = self.resolve_byte_target(memory, target);
                self.registers.a = self.add(value);
                (self.pc.wrapping_add(length), byte_op_cycles(target))
            }
            Instruction::ADC(target) => {
                let (value, length) = self.resolve_byte_target(memory, target);
                self.registers.a = self.adc(value);
                (self.pc.wrapping_add(length), byte_op_cycles(target))
            }
            Instruction::SUB(target) => {
                let (value, length) = self.resolve_byte_target(memory, target);
                self.registers.a = self.sub(value);
                (self.pc.wrapping_add(length), byte_op_cycles(target))
            }
            Instruction::SBC(target) => {
                let (value, length) = self.resolve_byte_target(memory, target);
                self.registers.a = self.sbc(value);
                (self.pc.wrapping_add(length), byte_op_cycles(target))
            }
            Instruction::AND(target) => {
                let (value, length) = self.resolve_byte_target(memory, target);
                self.registers.a = self.and(value);
                (self.pc.wrapping_add(length), byte_op_cycles(target))
            }
            Instruction::XOR(target) => {
                let (value, length) = self.resolve_byte_target(memory, target);
                self.registers.a = self.xor(value);
                (self.pc.wrapping_add(length), byte_op_cycles(target))
            }
            Instruction::OR(target) => {
                let (value, length) = self.resolve_byte_target(memory, target);
                self.registers.a = self.or(value);
                (self.pc.wrapping_add(length), byte_op_cycles(target))
            }
            Instruction::CP(target) => {
                let (value, length) = self.resolve_byte_target(memory, target);
                self.cp(value);
                (self.pc.wrapping_add(length), byte_op_cycles(target))
            }

            Instruction::ADDHL(target) => {
                let value = match target {
                    ArithmeticHLTarget::BC => self.registers.get_bc(),
                    ArithmeticHLTarget::DE => self.registers.get_de(),
                    ArithmeticHLTarget::HL => self.registers.get_hl(),
                    ArithmeticHLTarget::SP => self.sp,
                };
                let result = self.add_hl(value);
                self.registers.set_hl(result);
                (self.pc.wrapping_add(1), 2)
            }
            Instruction::ADDSP => {
                let offset = self.read_next_byte(memory) as i8;
                self.sp = self.add_sp_signed(self.sp, offset);
                (self.pc.wrapping_add(2), 4)
            }
            Instruction::LDHL => {
                let offset = self.read_next_byte(memory) as i8;
                let result = self.add_sp_signed(self.sp, offset);
                self.registers.set_hl(result);
                (self.pc.wrapping_add(2), 3)
            }

            Instruction::INC(target) => {
                let cycles = inc_dec_cycles(target);
                match target {
                    IncDecTarget::A => self.registers.a = self.inc(self.registers.a),
                    IncDecTarget::B => self.registers.b = self.inc(self.registers.b),
                    IncDecTarget::C => self.registers.c = self.inc(self.registers.c),
                    IncDecTarget::D => self.registers.d = self.inc(self.registers.d),
                    IncDecTarget::E => self.registers.e = self.inc(self.registers.e),
                    IncDecTarget::H => self.registers.h = self.inc(self.registers.h),
                    IncDecTarget::L => self.registers.l = self.inc(self.registers.l),
                    // The 16-bit forms touch no flags.
                    IncDecTarget::BC => {
                        let value = self.registers.get_bc().wrapping_add(1);
                        self.registers.set_bc(value);
                    }
                    IncDecTarget::DE => {
                        let value = self.registers.get_de().wrapping_add(1);
                        self.registers.set_de(value);
                    }
                    IncDecTarget::HL => {
                        let value = self.registers.get_hl().wrapping_add(1);
                        self.registers.set_hl(value);
                    }
                    IncDecTarget::SP => self.sp = self.sp.wrapping_add(1),
                    IncDecTarget::HLREF => {
                        let address = self.registers.get_hl();
                        let value = memory.read_byte(address);
                        let result = self.inc(value);
                        memory.write_byte(address, result);
                    }
                }
                (self.pc.wrapping_add(1), cycles)
            }
            Instruction::DEC(target) => {
                let cycles = inc_dec_cycles(target);
                match target {
                    IncDecTarget::A => self.registers.a = self.dec(self.registers.a),
                    IncDecTarget::B => self.registers.b = self.dec(self.registers.b),
                    IncDecTarget::C => self.registers.c = self.dec(self.registers.c),
                    IncDecTarget::D => self.registers.d = self.dec(self.registers.d),
                    IncDecTarget::E => self.registers.e = self.dec(self.registers.e),
                    IncDecTarget::H => self.registers.h = self.dec(self.registers.h),
                    IncDecTarget::L => self.registers.l = self.dec(self.registers.l),
                    IncDecTarget::BC => {
                        let value = self.registers.get_bc().wrapping_sub(1);
                        self.registers.set_bc(value);
                    }
                    IncDecTarget::DE => {
                        let value = self.registers.get_de().wrapping_sub(1);
                        self.registers.set_de(value);
                    }
                    IncDecTarget::HL => {
                        let value = self.registers.get_hl().wrapping_sub(1);
                        self.registers.set_hl(value);
                    }
                    IncDecTarget::SP => self.sp = self.sp.wrapping_sub(1),
                    IncDecTarget::HLREF => {
                        let address = self.registers.get_hl();
                        let value = memory.read_byte(address);
                        let result = self.dec(value);
                        memory.write_byte(address, result);
                    }
                }
                (self.pc.wrapping_add(1), cycles)
            }

            Instruction::DAA => {
                self.daa();
                (self.pc.wrapping_add(1), 1)
            }
            Instruction::CPL => {
                self.cpl();
                (self.pc.wrapping_add(1), 1)
            }
            Instruction::SCF => {
                self.scf();
                (self.pc.wrapping_add(1), 1)
            }
            Instruction::CCF => {
                self.ccf();
                (self.pc.wrapping_add(1), 1)
            }

            Instruction::RLCA => {
                self.rlca();
                (self.pc.wrapping_add(1), 1)
            }
            Instruction::RRCA => {
                self.rrca();
                (self.pc.wrapping_add(1), 1)
            }
            Instruction::RLA => {
                self.rla();
                (self.pc.wrapping_add(1), 1)
            }
            Instruction::RRA => {
                self.rra();
                (self.pc.wrapping_add(1), 1)
            }

            Instruction::JP(JumpTest::HL) => (self.registers.get_hl(), 1),
            Instruction::JP(test) => {
                if self.condition_met(test) {
                    (self.read_next_word(memory), 4)
                } else {
                    (self.pc.wrapping_add(3), 3)
                }
            }
            Instruction::JR(test) => {
                if self.condition_met(test) {
                    let offset = self.read_next_byte(memory) as i8;
                    (self.pc.wrapping_add(2).wrapping_add(offset as u16), 3)
                } else {
                    (self.pc.wrapping_add(2), 2)
                }
            }
            Instruction::CALL(test) => {
                let return_address = self.pc.wrapping_add(3);
                if self.condition_met(test) {
                    let target = self.read_next_word(memory);
                    self.push(memory, return_address);
                    (target, 6)
                } else {
                    (return_address, 3)
                }
            }
            Instruction::RET(JumpTest::Always) => (self.pop(memory), 4),
            Instruction::RET(test) => {
                if self.condition_met(test) {
                    (self.pop(memory), 5)
                } else {
                    (self.pc.wrapping_add(1), 2)
                }
            }
            Instruction::RETI => {
                // Unlike EI, the re-enable takes effect within this step.
                self.ime = true;
                (self.pop(memory), 4)
            }
            Instruction::RST(address) => {
                let return_address = self.pc.wrapping_add(1);
                self.push(memory, return_address);
                (address as u16, 4)
            }

            Instruction::PUSH(target) => {
                let value = match target {
                    StackTarget::BC => self.registers.get_bc(),
                    StackTarget::DE => self.registers.get_de(),
                    StackTarget::HL => self.registers.get_hl(),
                    StackTarget::AF => self.registers.get_af(),
                };
                self.push(memory, value);
                (self.pc.wrapping_add(1), 4)
            }
            Instruction::POP(target) => {
                let value = self.pop(memory);
                match target {
                    StackTarget::BC => self.registers.set_bc(value),
                    StackTarget::DE => self.registers.set_de(value),
                    StackTarget::HL => self.registers.set_hl(value),
                    // set_af discards the low nibble of F.
                    StackTarget::AF => self.registers.set_af(value),
                }
                (self.pc.wrapping_add(1), 3)
            }

            Instruction::LD(LoadType::Byte(target, source)) => {
                let value = match source {
                    LoadByteSource::A => self.registers.a,
                    LoadByteSource::B => self.registers.b,
                    LoadByteSource::C => self.registers.c,
                    LoadByteSource::D => self.registers.d,
                    LoadByteSource::E => self.registers.e,
                    LoadByteSource::H => self.registers.h,
                    LoadByteSource::L => self.registers.l,
                    LoadByteSource::D8 => self.read_next_byte(memory),
                    LoadByteSource::HL => memory.read_byte(self.registers.get_hl()),
                    LoadByteSource::HLI => {
                        let address = self.registers.get_hl();
                        self.registers.set_hl(address.wrapping_add(1));
                        memory.read_byte(address)
                    }
                    LoadByteSource::HLD => {
                        let address = self.registers.get_hl();
                        self.registers.set_hl(address.wrapping_sub(1));
                        memory.read_byte(address)
                    }
                    LoadByteSource::BC => memory.read_byte(self.registers.get_bc()),
                    LoadByteSource::DE => memory.read_byte(self.registers.get_de()),
                    LoadByteSource::A8 => {
                        let offset = self.read_next_byte(memory) as u16;
                        memory.read_byte(0xFF00 | offset)
                    }
                    LoadByteSource::A16 => {
                        let address = self.read_next_word(memory);
                        memory.read_byte(address)
                    }
                    LoadByteSource::HiC => memory.read_byte(0xFF00 | self.registers.c as u16),
                };
                match target {
                    LoadByteTarget::A => self.registers.a = value,
                    LoadByteTarget::B => self.registers.b = value,
                    LoadByteTarget::C => self.registers.c = value,
                    LoadByteTarget::D => self.registers.d = value,
                    LoadByteTarget::E => self.registers.e = value,
                    LoadByteTarget::H => self.registers.h = value,
                    LoadByteTarget::L => self.registers.l = value,
                    LoadByteTarget::HL => memory.write_byte(self.registers.get_hl(), value),
                    LoadByteTarget::HLI => {
                        let address = self.registers.get_hl();
                        memory.write_byte(address, value);
                        self.registers.set_hl(address.wrapping_add(1));
                    }
                    LoadByteTarget::HLD => {
                        let address = self.registers.get_hl();
                        memory.write_byte(address, value);
                        self.registers.set_hl(address.wrapping_sub(1));
                    }
                    LoadByteTarget::BC => memory.write_byte(self.registers.get_bc(), value),
                    LoadByteTarget::DE => memory.write_byte(self.registers.get_de(), value),
                    LoadByteTarget::A8 => {
                        let offset = self.read_next_byte(memory) as u16;
                        memory.write_byte(0xFF00 | offset, value);
                    }
                    LoadByteTarget::A16 => {
                        let address = self.read_next_word(memory);
                        memory.write_byte(address, value);
                    }
                    LoadByteTarget::HiC => {
                        memory.write_byte(0xFF00 | self.registers.c as u16, value);
                    }
                }
                let length = 1 + ld_byte_operand_bytes(target, source);
                let cycles = ld_byte_cycles(target, source);
                (self.pc.wrapping_add(length), cycles)
            }
            Instruction::LD(LoadType::Word(target, source)) => {
                let value = match source {
                    LoadWordSource::D16 => self.read_next_word(memory),
                    LoadWordSource::SP => self.sp,
                    LoadWordSource::HL => self.registers.get_hl(),
                };
                match target {
                    LoadWordTarget::BC => self.registers.set_bc(value),
                    LoadWordTarget::DE => self.registers.set_de(value),
                    LoadWordTarget::HL => self.registers.set_hl(value),
                    LoadWordTarget::SP => self.sp = value,
                    LoadWordTarget::A16 => {
                        let address = self.read_next_word(memory);
                        memory.write_word(address, value);
                    }
                }
                let (length, cycles) = match (target, source) {
                    (LoadWordTarget::A16, _) => (3, 5),
                    (LoadWordTarget::SP, LoadWordSource::HL) => (1, 2),
                    _ => (3, 3),
                };
                (self.pc.wrapping_add(length), cycles)
            }

            Instruction::RLC(target) => self.prefix_rotate(memory, target, Cpu::rlc),
            Instruction::RRC(target) => self.prefix_rotate(memory, target, Cpu::rrc),
            Instruction::RL(target) => self.prefix_rotate(memory, target, Cpu::rl),
            Instruction::RR(target) => self.prefix_rotate(memory, target, Cpu::rr),
            Instruction::SLA(target) => self.prefix_rotate(memory, target, Cpu::sla),
            Instruction::SRA(target) => self.prefix_rotate(memory, target, Cpu::sra),
            Instruction::SWAP(target) => self.prefix_rotate(memory, target, Cpu::swap),
            Instruction::SRL(target) => self.prefix_rotate(memory, target, Cpu::srl),
            Instruction::BIT(bit, target) => {
                let value = self.read_prefix_target(memory, target);
                self.bit(bit, value);
                let cycles = if target == PrefixTarget::HL { 3 } else { 2 };
                (self.pc.wrapping_add(2), cycles)
            }
            Instruction::RES(bit, target) => {
                let value = self.read_prefix_target(memory, target);
                self.write_prefix_target(memory, target, value & !(1 << bit));
                let cycles = if target == PrefixTarget::HL { 4 } else { 2 };
                (self.pc.wrapping_add(2), cycles)
            }
            Instruction::SET(bit, target) => {
                let value = self.read_prefix_target(memory, target);
                self.write_prefix_target(memory, target, value | (1 << bit));
                let cycles = if target == PrefixTarget::HL { 4 } else { 2 };
                (self.pc.wrapping_add(2), cycles)
            }
        }
    }

    /// Shared read/modify/write path of the CB rotate and shift family.
    fn prefix_rotate<M: Memory>(
        &mut self,
        memory: &mut M,
        target: PrefixTarget,
        op: fn(&mut Cpu, u8) -> u8,
    ) -> (u16, u32) {
        let value = self.read_prefix_target(memory, target);
        let result = op(self, value);
        self.write_prefix_target(memory, target, result);
        let cycles = if target == PrefixTarget::HL { 4 } else { 2 };
        (self.pc.wrapping_add(2), cycles)
    }

    fn push<M: Memory>(&mut self, memory: &mut M, value: u16) {
        self.sp = self.sp.wrapping_sub(2);
        memory.write_word(self.sp, value);
    }

    fn pop<M: Memory>(&mut self, memory: &mut M) -> u16 {
        let value = memory.read_word(self.sp);
        self.sp = self.sp.wrapping_add(2);
        value
    }

    fn read_next_byte<M: Memory>(&mut self, memory: &mut M) -> u8 {
        memory.read_byte(self.pc.wrapping_add(1))
    }

    fn read_next_word<M: Memory>(&mut self, memory: &mut M) -> u16 {
        memory.read_word(self.pc.wrapping_add(1))
    }
}

impl Default for Cpu {
    fn default() -> Self {
        Cpu::new()
    }
}

/// Accumulator arithmetic: one cycle on a register, two on `(HL)` or an
/// immediate operand.
fn byte_op_cycles(target: ByteTarget) -> u32 {
    match target {
        ByteTarget::HL | ByteTarget::Imm8 => 2,
        _ => 1,
    }
}

fn inc_dec_cycles(target: IncDecTarget) -> u32 {
    match target {
        IncDecTarget::BC | IncDecTarget::DE | IncDecTarget::HL | IncDecTarget::SP => 2,
        IncDecTarget::HLREF => 3,
        _ => 1,
    }
}

fn ld_byte_operand_bytes(target: LoadByteTarget, source: LoadByteSource) -> u16 {
    let source_bytes = match source {
        LoadByteSource::D8 | LoadByteSource::A8 => 1,
        LoadByteSource::A16 => 2,
        _ => 0,
    };
    let target_bytes = match target {
        LoadByteTarget::A8 => 1,
        LoadByteTarget::A16 => 2,
        _ => 0,
    };
    source_bytes.max(target_bytes)
}

fn ld_byte_cycles(target: LoadByteTarget, source: LoadByteSource) -> u32 {
    match (target, source) {
        (LoadByteTarget::A8, _) | (_, LoadByteSource::A8) => 3,
        (LoadByteTarget::A16, _) | (_, LoadByteSource::A16) => 4,
        (LoadByteTarget::HiC, _) | (_, LoadByteSource::HiC) => 2,
        (LoadByteTarget::HL, LoadByteSource::D8) => 3,
        (_, LoadByteSource::D8) => 2,
        (LoadByteTarget::HL, _) | (LoadByteTarget::HLI, _) | (LoadByteTarget::HLD, _) => 2,
        (_, LoadByteSource::HL) | (_, LoadByteSource::HLI) | (_, LoadByteSource::HLD) => 2,
        (LoadByteTarget::BC, _) | (LoadByteTarget::DE, _) => 2,
        (_, LoadByteSource::BC) | (_, LoadByteSource::DE) => 2,
        _ => 1,
    }
}
