use std::fmt::Display;

/// Destination set of a compute instruction.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dest {
    pub a: bool,
    pub d: bool,
    pub m: bool,
}

impl Dest {
    pub const NONE: Dest = Dest {
        a: false,
        d: false,
        m: false,
    };

    /// Letters may come in any order. Anything other than `A`, `D` or `M` is rejected.
    pub fn parse(s: &str) -> Result<Self, String> {
        let s = s.trim();
        if s.is_empty() {
            return Err(format!("Empty destination"));
        }
        let mut dest = Dest::NONE;
        for c in s.chars() {
            match c {
                'A' => dest.a = true,
                'D' => dest.d = true,
                'M' => dest.m = true,
                _ => return Err(format!("Unknown destination: `{s}`")),
            }
        }
        Ok(dest)
    }

    pub fn is_none(&self) -> bool {
        *self == Dest::NONE
    }

    /// `d1 d2 d3` = A, D, M
    pub fn bits(&self) -> u16 {
        (self.a as u16) << 2 | (self.d as u16) << 1 | self.m as u16
    }

    pub fn from_bits(bits: u16) -> Self {
        Dest {
            a: bits & 0b100 != 0,
            d: bits & 0b010 != 0,
            m: bits & 0b001 != 0,
        }
    }
}

impl Display for Dest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.a {
            write!(f, "A")?;
        }
        if self.d {
            write!(f, "D")?;
        }
        if self.m {
            write!(f, "M")?;
        }
        Ok(())
    }
}
