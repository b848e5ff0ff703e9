//! Read and rewrite block 4 of a card in the simulated field.
//!
//! Usage:
//!   RUST_LOG=debug cargo run -p librc522 --example read_card

use anyhow::Context;
use librc522::card::Session;
use librc522::card::operations::dump;
use librc522::prelude::*;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let sim = SimulatedReader::with_card([0x12, 0x34, 0x56, 0x78]);
    let mut reader = ReaderBuilder::new()
        .with_transport(Box::new(sim.clone()))
        .build()
        .context("initializing reader")?;
    println!("Chip version: {:?}", reader.version()?);

    let mut session = Session::new(&mut reader);
    let card = session.connect(RequestMode::Idle).context("no card")?;
    println!(
        "Card {} ATQA={:04x} SAK={:02x}",
        card.uid(),
        card.atqa().as_u16(),
        card.sak()
    );

    let key = SectorKey::from_hex("ff ff ff ff ff ff")?;
    let block = BlockAddress::new(4)?;
    session.authenticate(KeyType::A, block, &key)?;
    session.write_block(block, &BlockData::from_bytes(*b"License permit:B"))?;
    let data = session.read_block(block)?;
    println!("Block {}: {} {:?}", block, data.to_hex(), data.to_ascii_safe());

    for read in dump(&mut session, KeyType::A, &key)? {
        match read.data {
            Some(data) => println!("{:>2}: {}", read.address, bytes_to_hex_spaced(data.as_bytes())),
            None => println!("{:>2}: {}", read.address, read.status),
        }
    }

    session.halt()?;
    println!("Air frames sent: {}", sim.air_frames().len());
    Ok(())
}
