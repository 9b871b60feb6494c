//! MOVE tests driven by the JSON vectors in `tests/vectors/`.
//!
//! Each vector describes the initial registers and memory, one MOVE, and
//! either the expected state (checked through `Observable` paths and raw
//! memory) or the expected error kind. The CPU is bootstrapped before the
//! vector's setup is applied, so `sr` in a setup can drop to user mode.
//! Setup entries apply in the order written: `a7` after `sr` lands in
//! whichever stack pointer that SR selects.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use cpu_m68k::{
    Access, AddrMode, BusFault, Cpu68000, FunctionCode, M68kBus, Operand, Register, Size,
};
use emu_core::Observable;
use serde::Deserialize;
use serde_json::{Map, Value as JsonValue};

/// Full 16MB address space for the 68000 (24-bit addresses).
struct TestBus {
    data: Vec<u8>,
}

impl TestBus {
    fn new() -> Self {
        Self {
            data: vec![0; 0x100_0000],
        }
    }

    fn span(&self, addr: u32, size: Size, access: Access) -> Result<usize, BusFault> {
        let start = addr as usize;
        if start + size.bytes() as usize > self.data.len() {
            return Err(BusFault {
                address: addr,
                size,
                access,
            });
        }
        Ok(start)
    }
}

impl M68kBus for TestBus {
    fn read(&mut self, addr: u32, size: Size, _fc: FunctionCode) -> Result<u32, BusFault> {
        let start = self.span(addr, size, Access::Read)?;
        let bytes = &self.data[start..start + size.bytes() as usize];
        Ok(bytes.iter().fold(0, |acc, &b| (acc << 8) | u32::from(b)))
    }

    fn write(
        &mut self,
        addr: u32,
        value: u32,
        size: Size,
        _fc: FunctionCode,
    ) -> Result<(), BusFault> {
        let start = self.span(addr, size, Access::Write)?;
        let n = size.bytes() as usize;
        self.data[start..start + n].copy_from_slice(&value.to_be_bytes()[4 - n..]);
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
struct MoveSpec {
    size: String,
    src: String,
    dst: String,
}

#[derive(Debug, Deserialize)]
struct Vector {
    name: String,
    #[serde(default)]
    setup: Map<String, JsonValue>,
    #[serde(default)]
    memory: BTreeMap<String, String>,
    #[serde(rename = "move")]
    op: MoveSpec,
    #[serde(default)]
    expect: BTreeMap<String, String>,
    #[serde(default)]
    expect_memory: BTreeMap<String, String>,
    #[serde(default)]
    error: Option<String>,
}

/// Parse `0x1F`, `$1F` (hex) or `31` (decimal).
fn number(text: &str) -> u32 {
    let hex = text.strip_prefix("0x").or_else(|| text.strip_prefix('$'));
    match hex {
        Some(digits) => u32::from_str_radix(digits, 16),
        None => text.parse(),
    }
    .unwrap_or_else(|e| panic!("bad number {text:?}: {e}"))
}

fn size(text: &str) -> Size {
    match text {
        "byte" => Size::Byte,
        "word" => Size::Word,
        "long" => Size::Long,
        other => panic!("bad size {other:?}"),
    }
}

/// Parse assembler-style operands: `d0`, `a3`, `sp`, `(a0)`, `(a0)+`, `-(a0)`.
fn operand(text: &str) -> Operand {
    let reg = |name: &str| {
        name.parse::<Register>()
            .unwrap_or_else(|e| panic!("bad operand {text:?}: {e}"))
    };
    if let Some(inner) = text.strip_prefix("-(").and_then(|s| s.strip_suffix(')')) {
        Operand::new(reg(inner), AddrMode::AddrRegIndirectPreDec)
    } else if let Some(inner) = text.strip_prefix('(').and_then(|s| s.strip_suffix(")+")) {
        Operand::new(reg(inner), AddrMode::AddrRegIndirectPostInc)
    } else if let Some(inner) = text.strip_prefix('(').and_then(|s| s.strip_suffix(')')) {
        Operand::indirect(reg(inner))
    } else {
        let r = reg(text);
        if r.is_data() {
            Operand::data_reg(r)
        } else {
            Operand::addr_reg(r)
        }
    }
}

fn run_vector(vector: &Vector) -> Vec<String> {
    let name = &vector.name;
    let mut cpu = Cpu68000::new();
    let mut bus = TestBus::new();
    cpu.bootstrap();

    for (reg, value) in &vector.setup {
        let reg: Register = reg.parse().unwrap_or_else(|e| panic!("{name}: {e}"));
        let value = value
            .as_str()
            .unwrap_or_else(|| panic!("{name}: setup {reg} is not a string"));
        cpu.set_register(reg, number(value));
    }
    for (addr, value) in &vector.memory {
        bus.data[number(addr) as usize] = number(value) as u8;
    }

    let result = cpu.exec_move(
        &mut bus,
        operand(&vector.op.dst),
        operand(&vector.op.src),
        size(&vector.op.size),
    );

    let mut errors = Vec::new();
    match (&vector.error, result) {
        (None, Err(e)) => errors.push(format!("{name}: unexpected error: {e}")),
        (Some(kind), Ok(())) => errors.push(format!("{name}: expected {kind} error, got success")),
        (Some(kind), Err(e)) => {
            let actual = if e.is_bus_fault() { "bus" } else { "internal" };
            if kind != actual {
                errors.push(format!("{name}: expected {kind} error, got {e}"));
            }
        }
        (None, Ok(())) => {}
    }

    for (path, expected) in &vector.expect {
        let actual = cpu.query(path).and_then(|v| v.as_u32());
        if actual != Some(number(expected)) {
            errors.push(format!(
                "{name}: {path} mismatch: got {actual:X?}, expected {expected}"
            ));
        }
    }

    for (addr, expected) in &vector.expect_memory {
        let actual = bus.data[number(addr) as usize];
        if u32::from(actual) != number(expected) {
            errors.push(format!(
                "{name}: RAM[{addr}] mismatch: got 0x{actual:02X}, expected {expected}"
            ));
        }
    }

    errors
}

fn vector_files() -> Vec<PathBuf> {
    let pattern = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/vectors/*.json");
    let mut files: Vec<_> = glob::glob(&pattern.to_string_lossy())
        .expect("valid glob pattern")
        .filter_map(Result::ok)
        .collect();
    files.sort();
    files
}

#[test]
fn all_move_vectors_pass() {
    let files = vector_files();
    assert!(!files.is_empty(), "no vector files found");

    let mut total = 0;
    let mut failures = Vec::new();
    for path in &files {
        let text = fs::read_to_string(path).expect("readable vector file");
        let vectors: Vec<Vector> = serde_json::from_str(&text)
            .unwrap_or_else(|e| panic!("{}: {e}", path.display()));
        for vector in &vectors {
            total += 1;
            failures.extend(run_vector(vector));
        }
    }

    assert!(total >= 20, "only {total} vectors loaded");
    assert!(failures.is_empty(), "{} failures:\n{}", failures.len(), failures.join("\n"));
}
