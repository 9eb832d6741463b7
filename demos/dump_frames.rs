use gifplay::{GifTexture, LoadOptions, RecordingSink, load_path};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let mut args = std::env::args().skip(1);
    let Some(input) = args.next() else {
        anyhow::bail!("usage: dump_frames <input.gif> [out_dir]");
    };
    let out_dir = std::path::PathBuf::from(args.next().unwrap_or_else(|| "target/frames".into()));
    std::fs::create_dir_all(&out_dir)?;

    let player = load_path(&input, &LoadOptions::default())?;
    println!(
        "{input}: {}x{}, {} frames, {} cs total",
        player.width(),
        player.height(),
        player.frame_count(),
        player.total_duration_cs()
    );

    for (i, frame) in player.frames().iter().enumerate() {
        frame.to_rgba_image().save(out_dir.join(format!("frame_{i:04}.png")))?;
    }

    // Simulate one loop at 60 Hz.
    let mut tex = GifTexture::new(player, RecordingSink::new())?;
    let ticks = (tex.player().total_duration_cs() as f32 / 100.0 * 60.0).ceil() as usize;
    for _ in 0..ticks.max(1) {
        tex.step(1.0 / 60.0)?;
    }
    println!("uploads over one loop: {:?}", tex.sink().uploads());
    tex.unload();

    Ok(())
}
