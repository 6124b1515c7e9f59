use crate::{comp::Comp, dest::Dest, jump::Jump, mem::MAX_ADDR};

use color_print::cformat;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inst {
    /// `@value`
    Addr(u16),
    /// `dest=comp;jump`
    Comp(Dest, Comp, Jump),
}

impl Inst {
    /// Address instructions only carry 15 bits.
    pub fn addr(value: u16) -> Result<Inst, String> {
        if value > MAX_ADDR {
            return Err(format!("Value out of range: {value} > {MAX_ADDR}"));
        }
        Ok(Inst::Addr(value))
    }

    pub fn to_bin(&self) -> u16 {
        match self {
            Inst::Addr(value) => value & MAX_ADDR,
            Inst::Comp(dest, comp, jump) => {
                0b111 << 13 | comp.code() << 6 | dest.bits() << 3 | jump.bits()
            }
        }
    }

    pub fn from_bin(bin: u16) -> Option<Inst> {
        if bin >> 15 == 0 {
            return Some(Inst::Addr(bin));
        }
        if bin >> 13 != 0b111 {
            return None;
        }
        let comp = Comp::from_code(bin >> 6 & 0b1111111)?;
        let dest = Dest::from_bits(bin >> 3 & 0b111);
        let jump = Jump::from_bits(bin & 0b111);
        Some(Inst::Comp(dest, comp, jump))
    }

    /// 16 characters of `0`/`1`, most significant bit first.
    pub fn to_bin_string(&self) -> String {
        format!("{:016b}", self.to_bin())
    }

    pub fn from_bin_string(s: &str) -> Option<Inst> {
        if s.len() != 16 {
            return None;
        }
        u16::from_str_radix(s, 2).ok().and_then(Inst::from_bin)
    }
}

impl Inst {
    pub fn cformat(&self) -> String {
        match self {
            Inst::Addr(value) => cformat!("<r>@</><y>{}</>", value),
            Inst::Comp(dest, comp, jump) => {
                let dest = if dest.is_none() {
                    String::new()
                } else {
                    cformat!("<b>{}</>=", dest)
                };
                let jump = match jump.mnemonic() {
                    Some(jump) => cformat!(";<r>{}</>", jump),
                    None => String::new(),
                };
                cformat!("{}<g>{}</>{}", dest, comp, jump)
            }
        }
    }
}

impl std::fmt::Display for Inst {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Inst::Addr(value) => write!(f, "@{}", value),
            Inst::Comp(dest, comp, jump) => {
                if !dest.is_none() {
                    write!(f, "{}=", dest)?;
                }
                write!(f, "{}", comp)?;
                if let Some(jump) = jump.mnemonic() {
                    write!(f, ";{}", jump)?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! test_inst {
        ($($name:ident: $inst:expr => $bin:expr,)*) => {
            $(
                #[test]
                fn $name() {
                    let inst = $inst;
                    let bin = inst.to_bin_string();
                    assert_eq!(bin, $bin);
                    assert_eq!(Inst::from_bin_string(&bin), Some(inst));
                }
            )*
        }
    }

    fn c(dest: &str, comp: Comp, jump: Jump) -> Inst {
        let dest = if dest.is_empty() {
            Dest::NONE
        } else {
            Dest::parse(dest).unwrap()
        };
        Inst::Comp(dest, comp, jump)
    }

    test_inst! {
        test_addr_zero: Inst::Addr(0) => "0000000000000000",
        test_addr_two: Inst::Addr(2) => "0000000000000010",
        test_addr_max: Inst::Addr(32767) => "0111111111111111",
        test_d_eq_a: c("D", Comp::A, Jump::NEVER) => "1110110000010000",
        test_d_eq_d_plus_a: c("D", Comp::DPlusA, Jump::NEVER) => "1110000010010000",
        test_m_eq_d: c("M", Comp::D, Jump::NEVER) => "1110001100001000",
        test_m_eq_one: c("M", Comp::One, Jump::NEVER) => "1110111111001000",
        test_zero_jmp: c("", Comp::Zero, Jump::ALWAYS) => "1110101010000111",
        test_d_jgt: c("", Comp::D, Jump::parse("JGT").unwrap()) => "1110001100000001",
        test_amd_m_plus_one: c("AMD", Comp::MPlusOne, Jump::NEVER) => "1111110111111000",
    }

    #[test]
    fn addr_round_trips_over_full_range() {
        for value in 0..=MAX_ADDR {
            let inst = Inst::addr(value).unwrap();
            let bin = inst.to_bin_string();
            assert_eq!(bin.len(), 16);
            assert_eq!(Inst::from_bin_string(&bin), Some(Inst::Addr(value)));
        }
    }

    #[test]
    fn addr_rejects_16_bit_values() {
        assert!(Inst::addr(32768).is_err());
        assert!(Inst::addr(u16::MAX).is_err());
    }

    #[test]
    fn rejects_malformed_words() {
        // top bits 100
        assert_eq!(Inst::from_bin(0b1000_0000_0000_0000), None);
        // comp code 1111111 is unused
        assert_eq!(Inst::from_bin(0b1111_1111_1100_0000), None);
        assert_eq!(Inst::from_bin_string("0101"), None);
        assert_eq!(Inst::from_bin_string("000000000000000x"), None);
    }

    #[test]
    fn display_is_source_form() {
        assert_eq!(c("D", Comp::DPlusA, Jump::ALWAYS).to_string(), "D=D+A;JMP");
        assert_eq!(c("", Comp::Zero, Jump::ALWAYS).to_string(), "0;JMP");
        assert_eq!(Inst::Addr(16).to_string(), "@16");
    }
}
