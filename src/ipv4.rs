use crate::error::ParseError;
use lazy_static::lazy_static;
use log::{debug, warn};
use regex::Captures;
use regex::Regex;
use std::fmt::Display;
use std::fmt::Error;
use std::fmt::Formatter;
use std::net::Ipv4Addr;

pub const MAX_PREFIX: u8 = 32;
pub const MAX_OCTET: u32 = 255;

/// Packs `a.b.c.d` big-endian into a `u32`.
pub fn parse_dotted_quad(s: &str) -> Result<u32, ParseError> {
    lazy_static! {
        static ref RE: Regex =
            Regex::new(r"^([0-9]+)\.([0-9]+)\.([0-9]+)\.([0-9]+)$").expect("Not possible");
    }
    fn octet<'t>(ind: usize, v: &Captures<'t>, s: &str) -> Result<u32, ParseError> {
        v.get(ind)
            .and_then(|r| r.as_str().parse::<u32>().ok())
            .filter(|&o| o <= MAX_OCTET)
            .ok_or_else(|| ParseError::OctetOutOfRange(s.to_owned()))
    }

    match RE.captures(s) {
        Some(ref v) => Ok((octet(1, v, s)? << 24)
            | (octet(2, v, s)? << 16)
            | (octet(3, v, s)? << 8)
            | octet(4, v, s)?),
        _ => Err(ParseError::MalformedAddress(s.to_owned())),
    }
}

/// Accepts either a dotted mask (`255.255.255.0`) or a prefix length (`24`, `/24`).
///
/// A dotted mask is not required to be contiguous: its prefix is the count of
/// leading one bits and the mask itself is kept as given.
pub fn parse_mask_or_prefix(s: &str) -> Result<(u32, u8), ParseError> {
    if s.contains('.') {
        let mask = parse_dotted_quad(s).map_err(|_| ParseError::MalformedMask(s.to_owned()))?;
        let prefix = mask_to_prefix(mask);
        if prefix_to_mask(prefix)? != mask {
            warn!(
                "mask {} is not contiguous, reporting prefix /{}",
                address_to_dotted(mask),
                prefix
            );
        }
        Ok((mask, prefix))
    } else {
        let prefix = parse_prefix(s)?;
        Ok((prefix_to_mask(prefix)?, prefix))
    }
}

fn parse_prefix(s: &str) -> Result<u8, ParseError> {
    lazy_static! {
        static ref RE: Regex = Regex::new(r"^/?([0-9]{1,2})$").expect("Not possible");
    }
    RE.captures(s)
        .and_then(|v| v.get(1))
        .and_then(|r| r.as_str().parse::<u8>().ok())
        .filter(|&p| p <= MAX_PREFIX)
        .ok_or_else(|| ParseError::InvalidPrefixLength(s.to_owned()))
}

pub fn prefix_to_mask(prefix: u8) -> Result<u32, ParseError> {
    if prefix > MAX_PREFIX {
        return Err(ParseError::InvalidPrefixLength(prefix.to_string()));
    }
    if prefix == 0 {
        return Ok(0);
    }
    Ok(!((1u32 << (MAX_PREFIX - prefix)) - 1))
}

/// Counts leading one bits. Bits after the first zero are ignored.
pub fn mask_to_prefix(mask: u32) -> u8 {
    mask.leading_ones() as u8
}

pub fn address_to_dotted(addr: u32) -> String {
    Ipv4Addr::from(addr).to_string()
}

/// 32 characters of `0`/`1`, most significant bit first.
pub fn address_to_binary(addr: u32) -> String {
    format!("{:032b}", addr)
}

/// An address together with its mask; every other field is derived on demand.
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub struct NetworkCalculator {
    address: u32,
    mask: u32,
    prefix: u8,
}

impl NetworkCalculator {
    pub fn new(address: &str, mask: &str) -> Result<Self, ParseError> {
        let address = parse_dotted_quad(address)?;
        let (mask, prefix) = parse_mask_or_prefix(mask)?;
        debug!(
            "parsed address {} mask {} (/{})",
            address_to_dotted(address),
            address_to_dotted(mask),
            prefix
        );
        Ok(NetworkCalculator {
            address,
            mask,
            prefix,
        })
    }

    pub fn with_prefix(address: u32, prefix: u8) -> Result<Self, ParseError> {
        let mask = prefix_to_mask(prefix)?;
        Ok(NetworkCalculator {
            address,
            mask,
            prefix,
        })
    }

    pub fn address(&self) -> u32 {
        self.address
    }

    pub fn mask(&self) -> u32 {
        self.mask
    }

    pub fn prefix(&self) -> u8 {
        self.prefix
    }

    pub fn network_address(&self) -> u32 {
        self.address & self.mask
    }

    pub fn broadcast_address(&self) -> u32 {
        self.address | !self.mask
    }

    /// Wraps like plain 32-bit arithmetic, so `/32` yields the address after the host.
    pub fn first_host(&self) -> u32 {
        self.network_address().wrapping_add(1)
    }

    pub fn last_host(&self) -> u32 {
        self.broadcast_address().wrapping_sub(1)
    }

    /// `2^(32 - prefix)`; `/0` gives `2^32`.
    pub fn total_address_count(&self) -> u64 {
        1u64 << (MAX_PREFIX - self.prefix)
    }

    /// Network and broadcast are excluded unless the block has two addresses or fewer.
    pub fn usable_host_count(&self) -> u64 {
        let total = self.total_address_count();
        if total > 2 {
            total - 2
        } else {
            total
        }
    }
}

impl Display for NetworkCalculator {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        write!(f, "{}/{}", Ipv4Addr::from(self.address), self.prefix)
    }
}
