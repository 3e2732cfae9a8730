//! Prints hex and binary dumps of a byte buffer given as a hex string, from
//! the command line or stdin.

use std::io::Read;

use icdcodec::{decode_hex, dump};

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let input = if args.is_empty() {
        let mut s = String::new();
        std::io::stdin().read_to_string(&mut s)?;
        s
    } else {
        args.join(" ")
    };

    let bytes = decode_hex(&input)?;
    if bytes.is_empty() {
        anyhow::bail!("no bytes to dump (usage: dump_buffer <hex string>)");
    }

    print!("{}", dump::dump_hex(&bytes));
    println!();
    print!("{}", dump::dump_bits(&bytes));
    Ok(())
}
