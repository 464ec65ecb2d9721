use std::collections::{HashMap, VecDeque};

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

use fpga_console::bus::RegisterBus;
use fpga_console::command::{self, MAX_CMD_ARGS, MAX_TOKEN_LENGTH};
use fpga_console::console::{Console, PollEvent};
use fpga_console::queue::{self, CommandQueue, MAX_CMD_QUEUE, MAX_LINE_LENGTH};
use fpga_console::uart::Transport;

#[derive(Default)]
struct ScratchBus {
    words: HashMap<u32, u32>,
}

impl RegisterBus for ScratchBus {
    fn read_u8(&mut self, addr: u32) -> u8 {
        self.read_u32(addr) as u8
    }

    fn write_u8(&mut self, addr: u32, value: u8) {
        self.write_u32(addr, u32::from(value));
    }

    fn read_u32(&mut self, addr: u32) -> u32 {
        self.words.get(&addr).copied().unwrap_or(0)
    }

    fn write_u32(&mut self, addr: u32, value: u32) {
        self.words.insert(addr, value);
    }
}

#[derive(Default)]
struct ScratchLink {
    rx: VecDeque<u8>,
    tx: Vec<u8>,
}

impl Transport for ScratchLink {
    fn try_recv(&mut self) -> Option<u8> {
        self.rx.pop_front()
    }

    fn send(&mut self, byte: u8) {
        self.tx.push(byte);
    }
}

#[test]
fn parser_holds_its_bounds_on_arbitrary_bytes() {
    let mut rng = StdRng::seed_from_u64(0x00d1ce);
    for _ in 0..2_000 {
        let len = rng.gen_range(0..=96);
        let mut line = vec![0u8; len];
        rng.fill_bytes(&mut line);

        let parsed = command::parse(&line);
        assert!(parsed.value_count() <= MAX_CMD_ARGS);
        for index in 0..MAX_CMD_ARGS {
            assert!(parsed.raw(index).len() <= MAX_TOKEN_LENGTH);
        }
    }
}

#[test]
fn console_survives_byte_soup_and_stays_answerable() {
    let mut rng = StdRng::seed_from_u64(0x50d4);
    let mut soup = vec![0u8; 16 * 1024];
    rng.fill_bytes(&mut soup);
    // sprinkle newlines so dispatch actually fires on fragments
    for chunk in soup.chunks_mut(57) {
        if let Some(last) = chunk.last_mut() {
            *last = b'\n';
        }
    }

    let mut console = Console::new(ScratchBus::default(), ScratchLink::default());
    console.link_mut().rx.extend(&soup);
    while console.poll() != PollEvent::Idle {}
    assert!(console.queue().len() <= MAX_CMD_QUEUE);

    console.reset();
    console.link_mut().rx.extend(b"help\n");
    while console.poll() != PollEvent::Idle {}
    assert!(
        console
            .link_mut()
            .tx
            .starts_with(b"Available Commands:\n")
    );
}

#[test]
fn queue_matches_a_reference_model_under_random_ops() {
    let mut rng = StdRng::seed_from_u64(0xfeed);
    let mut queue = CommandQueue::new();
    let mut pending: VecDeque<Vec<u8>> = VecDeque::new();
    let mut slots_spent = 0usize;

    for _ in 0..1_000 {
        match rng.gen_range(0..8) {
            // enqueue, sometimes oversize
            0..=4 => {
                let len = rng.gen_range(0..=MAX_LINE_LENGTH + 8);
                let mut line = vec![0u8; len];
                rng.fill_bytes(&mut line);

                let outcome = queue.enqueue(&line);
                if slots_spent >= MAX_CMD_QUEUE {
                    assert_eq!(outcome, Err(queue::Error::Full));
                } else if len > MAX_LINE_LENGTH {
                    assert_eq!(outcome, Err(queue::Error::Oversize));
                } else {
                    assert_eq!(outcome, Ok(()));
                    pending.push_back(line);
                    slots_spent += 1;
                }
            }
            5 | 6 => {
                let got = queue.dequeue();
                let want = pending.pop_front();
                assert_eq!(got.as_deref(), want.as_deref());
            }
            _ => {
                queue.clear();
                pending.clear();
                slots_spent = 0;
            }
        }

        assert_eq!(queue.len(), pending.len());
        assert_eq!(queue.is_empty(), pending.is_empty());
        assert_eq!(queue.is_full(), slots_spent >= MAX_CMD_QUEUE);
    }
}
