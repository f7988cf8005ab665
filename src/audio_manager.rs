use std::{fs::File, io::BufReader, io::Cursor, io::Read, path::Path, sync::Arc};

use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink, Source};

fn load_bytes(path: &Path) -> Option<Vec<u8>> {
    let mut f = File::open(path).ok()?;
    let mut buf = Vec::new();
    f.read_to_end(&mut buf).ok()?;
    Some(buf)
}

/// One-shot sound effects. Without an output device `new` returns `None`
/// and the game runs silent.
pub struct AudioManager {
    _stream: OutputStream,
    handle: OutputStreamHandle,
    pickup: Option<Arc<Vec<u8>>>,
    pickup_volume: f32,
}

impl AudioManager {
    pub fn new() -> Option<Self> {
        let (_stream, handle) = match OutputStream::try_default() {
            Ok(pair) => pair,
            Err(err) => {
                log::warn!("no audio output ({err}), sound disabled");
                return None;
            }
        };
        Some(Self { _stream, handle, pickup: None, pickup_volume: 0.8 })
    }

    pub fn load_pickup(&mut self, path: &Path) {
        self.pickup = load_bytes(path).map(Arc::new);
        if self.pickup.is_none() {
            log::warn!("pickup sound {} missing, pickups will be silent", path.display());
        }
    }

    pub fn play_pickup(&self) {
        // own sink per cue, so back-to-back pickups never queue behind each other
        let Some(d) = self.pickup.clone() else { return };
        match Decoder::new(BufReader::new(Cursor::new(d.as_ref().clone()))) {
            Ok(dec) => {
                if let Ok(sink) = Sink::try_new(&self.handle) {
                    sink.append(dec.amplify(self.pickup_volume.clamp(0.0, 2.5)));
                    sink.detach();
                }
            }
            Err(err) => log::debug!("cannot decode pickup sound: {err}"),
        }
    }
}
