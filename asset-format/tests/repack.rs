mod common;

use std::io::Cursor;
use std::path::{Path, PathBuf};

use asset_format::{
    derive_key, AssetStore, Cipher, Error, ExtractOptions, HashStrategy, RepackOptions,
    RepackStats, ResolutionError, SharedSource, FILLER_BYTE, START_OFFSET, TERMINATOR,
};
use common::{build_host, names, sample_assets, Asset, FakeCipher, FakeCodec, TAIL};

fn extract(host: &[u8], known: &[Vec<u8>], dest: &Path, write_compressed: bool) {
    let mut store = AssetStore::load(&mut Cursor::new(host), FakeCipher).unwrap();
    store.resolve_names(known);
    let source = SharedSource::new(Cursor::new(host));
    let options = ExtractOptions {
        workers: None,
        write_compressed,
    };
    let stats = store
        .extract_all(&source, &FakeCodec, dest, &options)
        .unwrap();
    assert!(stats.failures.is_empty());
}

fn repack(
    host: &[u8],
    known: &[Vec<u8>],
    roots: &[PathBuf],
    options: &RepackOptions,
) -> (asset_format::Result<RepackStats>, Vec<u8>) {
    let mut store = AssetStore::load(&mut Cursor::new(host), FakeCipher).unwrap();
    store.resolve_names(known);
    let mut out = Cursor::new(host.to_vec());
    let result = store.repackage(&mut out, roots, &FakeCodec, options);
    (result, out.into_inner())
}

fn reopen(host: &[u8], known: &[Vec<u8>]) -> AssetStore<FakeCipher> {
    let mut store = AssetStore::load(&mut Cursor::new(host), FakeCipher).unwrap();
    let report = store.resolve_names(known);
    assert!(report.unresolved.is_empty(), "{:?}", report.unresolved);
    store
}

fn write_override(root: &Path, name: &str, data: &[u8]) {
    let path = root.join(name);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, data).unwrap();
}

#[test]
fn repack_of_own_extraction_is_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let assets = sample_assets();
    let known = names(&assets);
    let host = build_host(&assets);

    extract(&host, &known, dir.path(), true);
    let (result, out) = repack(
        &host,
        &known,
        &[dir.path().to_path_buf()],
        &RepackOptions::default(),
    );

    let stats = result.unwrap();
    assert!(stats.overridden.is_empty());
    assert!(stats.passthrough.is_empty());
    assert_eq!(stats.total_size, stats.capacity);
    assert_eq!(out, host);
}

#[test]
fn recompressing_from_raw_files_is_byte_identical() {
    let mut texture = image::RgbaImage::new(5, 2);
    texture.put_pixel(0, 0, image::Rgba([1, 2, 3, 255]));
    texture.put_pixel(4, 1, image::Rgba([9, 9, 9, 9]));

    let mut assets = sample_assets();
    assets.push(Asset::encrypted(
        "Data/Textures/items.png",
        &asset_format::pixels::canonicalize(texture),
    ));
    let known = names(&assets);
    let host = build_host(&assets);

    let dir = tempfile::tempdir().unwrap();
    extract(&host, &known, dir.path(), false);

    let options = RepackOptions {
        write_sidecars: true,
        ..Default::default()
    };
    let (result, out) = repack(&host, &known, &[dir.path().to_path_buf()], &options);
    result.unwrap();
    assert_eq!(out, host);

    let sidecar = dir.path().join("Data/Levels/Arena/dm1-1.lvl.zst");
    assert_eq!(std::fs::read(sidecar).unwrap(), b"Zlevel one geometry");
}

#[test]
fn override_root_takes_priority_and_rekeys() {
    let base = tempfile::tempdir().unwrap();
    let mods = tempfile::tempdir().unwrap();
    let assets = sample_assets();
    let known = names(&assets);
    let host = build_host(&assets);

    extract(&host, &known, base.path(), true);
    write_override(mods.path(), "Data/Levels/Arena/dm1-1.lvl", b"tiny");

    let old_key = reopen(&host, &known).key();
    let old_total = reopen(&host, &known).total_size();

    let roots = [mods.path().to_path_buf(), base.path().to_path_buf()];
    let (result, out) = repack(&host, &known, &roots, &RepackOptions::default());
    let stats = result.unwrap();

    assert_eq!(stats.overridden, vec!["Data/Levels/Arena/dm1-1.lvl".to_string()]);
    assert_ne!(stats.key, old_key);
    assert_eq!(stats.capacity, old_total);
    assert!(stats.total_size < old_total);
    assert_eq!(out.len(), host.len());

    let store = reopen(&out, &known);
    assert_eq!(store.key(), stats.key);
    assert_eq!(
        store.key(),
        derive_key(store.entries().iter().map(|e| e.payload_len()))
    );
    assert_eq!(store.total_size(), stats.total_size);

    let end = (START_OFFSET + stats.total_size) as usize;
    assert_eq!(&out[end..end + 8], &TERMINATOR);
    let filler_end = (START_OFFSET + old_total) as usize + 8;
    assert!(out[end + 8..filler_end].iter().all(|b| *b == FILLER_BYTE));
    assert!(out.ends_with(TAIL));
    assert_eq!(&out[..START_OFFSET as usize], &host[..START_OFFSET as usize]);

    let again = tempfile::tempdir().unwrap();
    extract(&out, &known, again.path(), false);
    assert_eq!(
        std::fs::read(again.path().join("Data/Levels/Arena/dm1-1.lvl")).unwrap(),
        b"tiny"
    );
    for asset in &assets[1..] {
        let path = again.path().join(std::str::from_utf8(&asset.name).unwrap());
        assert_eq!(std::fs::read(path).unwrap(), asset.content);
    }
}

#[test]
fn aligned_entries_stay_aligned_after_resize() {
    let base = tempfile::tempdir().unwrap();
    let mods = tempfile::tempdir().unwrap();
    let assets = sample_assets();
    let known = names(&assets);
    let host = build_host(&assets);

    extract(&host, &known, base.path(), true);

    for size in [1usize, 2, 5, 11, 18] {
        write_override(mods.path(), "Data/Config/readme.txt", &vec![b'x'; size]);

        let roots = [mods.path().to_path_buf(), base.path().to_path_buf()];
        let (result, out) = repack(&host, &known, &roots, &RepackOptions::default());
        result.unwrap();

        let store = reopen(&out, &known);
        let banks = store
            .entries()
            .iter()
            .filter(|e| e.filename().map_or(false, |n| n.ends_with(b".bank")))
            .collect::<Vec<_>>();
        assert_eq!(banks.len(), 2);
        for bank in banks {
            assert_eq!(bank.data_offset() % 32, 0, "{:?}", bank);
            let unpadded = FakeCipher.hash(bank.filename().unwrap(), store.key());
            assert!(bank.stored_hash().starts_with(&unpadded));
            let padding = bank.stored_hash().len() - unpadded.len();
            assert!((1..=32).contains(&padding));
        }
    }
}

#[test]
fn oversized_repack_fails_before_writing() {
    let base = tempfile::tempdir().unwrap();
    let mods = tempfile::tempdir().unwrap();
    let assets = sample_assets();
    let known = names(&assets);
    let host = build_host(&assets);

    extract(&host, &known, base.path(), true);
    write_override(mods.path(), "Data/Config/readme.txt", &[b'!'; 4096]);

    let roots = [mods.path().to_path_buf(), base.path().to_path_buf()];
    let (result, out) = repack(&host, &known, &roots, &RepackOptions::default());

    match result {
        Err(Error::Capacity(err)) => {
            assert!(err.required > err.available);
            assert_eq!(err.available, reopen(&host, &known).capacity());
        }
        other => panic!("unexpected result: {:?}", other),
    }
    assert_eq!(out, host);
}

#[test]
fn repacking_is_deterministic() {
    let base = tempfile::tempdir().unwrap();
    let mods = tempfile::tempdir().unwrap();
    let assets = sample_assets();
    let known = names(&assets);
    let host = build_host(&assets);

    extract(&host, &known, base.path(), true);
    write_override(mods.path(), "Data/Strings/strings00.str", b"hi");

    let roots = [mods.path().to_path_buf(), base.path().to_path_buf()];
    let (first, a) = repack(&host, &known, &roots, &RepackOptions::default());
    let (second, b) = repack(&host, &known, &roots, &RepackOptions::default());
    assert_eq!(first.unwrap().key, second.unwrap().key);
    assert_eq!(a, b);

    // Feeding the result back in with the same sources changes nothing.
    let (third, c) = repack(&a, &known, &roots, &RepackOptions::default());
    third.unwrap();
    assert_eq!(a, c);
}

#[test]
fn unsourced_entries_pass_through_with_their_size() {
    let base = tempfile::tempdir().unwrap();
    let mut assets = sample_assets();
    assets.push(Asset::plain("Secret/notes.txt", b"nobody knows"));
    let known = names(&sample_assets());
    let host = build_host(&assets);

    extract(&host, &known, base.path(), true);
    std::fs::remove_file(base.path().join("Data/Config/readme.txt")).unwrap();

    let (result, out) = repack(
        &host,
        &known,
        &[base.path().to_path_buf()],
        &RepackOptions::default(),
    );
    let stats = result.unwrap();

    assert_eq!(stats.passthrough.len(), 2);
    assert!(matches!(
        &stats.passthrough[0],
        ResolutionError::NoSource { name } if name == "Data/Config/readme.txt"
    ));
    assert!(matches!(
        stats.passthrough[1],
        ResolutionError::NoMatch { index: 5, .. }
    ));

    let before = AssetStore::load(&mut Cursor::new(&host), FakeCipher).unwrap();
    let after = AssetStore::load(&mut Cursor::new(&out), FakeCipher).unwrap();
    assert_eq!(before.key(), after.key());
    assert_eq!(before.total_size(), after.total_size());

    let unknown = &after.entries()[5];
    assert_eq!(unknown.stored_hash(), before.entries()[5].stored_hash());
    let data = &out[unknown.data_offset() as usize..][..unknown.data_size() as usize];
    assert!(data.iter().all(|b| *b == 0));

    let readme = &after.entries()[1];
    let data = &out[readme.data_offset() as usize..][..readme.data_size() as usize];
    assert!(data.iter().all(|b| *b == 0));
}

#[test]
fn legacy_strategy_truncates_hashes_at_nul() {
    let base = tempfile::tempdir().unwrap();
    let mods = tempfile::tempdir().unwrap();
    let assets = sample_assets();
    let known = names(&assets);
    let host = build_host(&assets);
    extract(&host, &known, base.path(), true);

    // Truncated hashes may grow by a byte; leave room for that.
    write_override(mods.path(), "Data/Config/readme.txt", b"x");

    let options = RepackOptions {
        hash_strategy: HashStrategy::TruncateAtNul,
        ..Default::default()
    };
    let roots = [mods.path().to_path_buf(), base.path().to_path_buf()];
    let (result, out) = repack(&host, &known, &roots, &options);
    let stats = result.unwrap();

    let store = AssetStore::load(&mut Cursor::new(&out), FakeCipher).unwrap();
    for (asset, entry) in assets.iter().zip(store.entries()) {
        if asset.name.ends_with(b".bank") {
            continue;
        }
        let full = FakeCipher.hash(&asset.name, stats.key);
        assert_eq!(
            entry.stored_hash(),
            HashStrategy::TruncateAtNul.apply(full).as_slice()
        );
        assert_eq!(entry.stored_hash().last(), Some(&0));
    }
}

#[test]
fn repack_works_through_a_file() {
    let dir = tempfile::tempdir().unwrap();
    let base = dir.path().join("base");
    let assets = sample_assets();
    let known = names(&assets);
    let host = build_host(&assets);
    extract(&host, &known, &base, true);

    let path = dir.path().join("copy.exe");
    std::fs::write(&path, &host).unwrap();

    let mut store = AssetStore::open(&path, FakeCipher).unwrap();
    store.resolve_names(&known);
    let mut file = std::fs::OpenOptions::new()
        .read(true)
        .write(true)
        .open(&path)
        .unwrap();
    store
        .repackage(&mut file, &[&base], &FakeCodec, &RepackOptions::default())
        .unwrap();
    drop(file);

    assert_eq!(std::fs::read(&path).unwrap(), host);
}

#[test]
fn repackaging_again_forgets_vanished_sources() {
    let base = tempfile::tempdir().unwrap();
    let assets = sample_assets();
    let known = names(&assets);
    let host = build_host(&assets);
    extract(&host, &known, base.path(), true);

    let mut store = AssetStore::load(&mut Cursor::new(&host), FakeCipher).unwrap();
    store.resolve_names(&known);
    let roots = [base.path().to_path_buf()];

    let mut first = Cursor::new(host.clone());
    store
        .repackage(&mut first, &roots, &FakeCodec, &RepackOptions::default())
        .unwrap();
    assert_eq!(first.into_inner(), host);
    assert!(store.entries()[1].source().is_some());

    std::fs::remove_file(base.path().join("Data/Config/readme.txt")).unwrap();

    let mut second = Cursor::new(host.clone());
    let stats = store
        .repackage(&mut second, &roots, &FakeCodec, &RepackOptions::default())
        .unwrap();
    let out = second.into_inner();

    match &stats.passthrough[..] {
        [ResolutionError::NoSource { name }] => assert_eq!(name, "Data/Config/readme.txt"),
        other => panic!("unexpected passthrough: {:?}", other),
    }
    assert!(store.entries()[1].source().is_none());

    let readme = &store.entries()[1];
    assert_eq!(readme.filename(), Some(&b"Data/Config/readme.txt"[..]));
    let data = &out[readme.data_offset() as usize..][..readme.data_size() as usize];
    assert!(data.iter().all(|b| *b == 0));

    let level = &store.entries()[0];
    let data = &out[level.data_offset() as usize..][..level.data_size() as usize];
    assert_eq!(data, &host[level.data_offset() as usize..][..level.data_size() as usize]);
}
