use crate::ipv4::{address_to_binary, address_to_dotted, NetworkCalculator};
use std::fmt::Display;
use std::fmt::Error;
use std::fmt::Formatter;

/// Every field shown to the user, captured from a [`NetworkCalculator`].
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Report {
    pub address: u32,
    pub mask: u32,
    pub prefix: u8,
    pub network: u32,
    pub broadcast: u32,
    pub first_host: u32,
    pub last_host: u32,
    pub total: u64,
    pub usable: u64,
}

impl From<&NetworkCalculator> for Report {
    fn from(calc: &NetworkCalculator) -> Self {
        Report {
            address: calc.address(),
            mask: calc.mask(),
            prefix: calc.prefix(),
            network: calc.network_address(),
            broadcast: calc.broadcast_address(),
            first_host: calc.first_host(),
            last_host: calc.last_host(),
            total: calc.total_address_count(),
            usable: calc.usable_host_count(),
        }
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        writeln!(f, "=== Network information ===")?;
        writeln!(f, "IP address: {}", address_to_dotted(self.address))?;
        writeln!(
            f,
            "Subnet mask: {} (/{})",
            address_to_dotted(self.mask),
            self.prefix
        )?;
        writeln!(f, "Network address: {}", address_to_dotted(self.network))?;
        writeln!(f, "Broadcast address: {}", address_to_dotted(self.broadcast))?;
        writeln!(f, "First usable host: {}", address_to_dotted(self.first_host))?;
        writeln!(f, "Last usable host: {}", address_to_dotted(self.last_host))?;
        writeln!(f, "Total addresses: {}", self.total)?;
        writeln!(f, "Usable hosts: {}", self.usable)?;
        writeln!(f)?;
        writeln!(f, "=== Binary representation ===")?;
        writeln!(f, "IP address:  {}", address_to_binary(self.address))?;
        writeln!(f, "Mask:        {}", address_to_binary(self.mask))?;
        writeln!(f, "Network:     {}", address_to_binary(self.network))
    }
}
