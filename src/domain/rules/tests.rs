// Unit tests for business rules

use super::*;

fn profile() -> ComplianceProfile {
    ComplianceProfile::default()
}

#[test]
fn test_scenario_a_mpeg4_video_in_mp4() {
    let streams = vec![
        StreamDescriptor::video(0, "mpeg4", Some(1_000_000)),
        StreamDescriptor::audio(1, "aac", Some(128_000)),
    ];

    let (verdict, actions) = StreamClassifier::classify(&profile(), ".mp4", &streams);

    assert!(!verdict.is_compliant);
    assert_eq!(verdict.reasons, vec!["video codec mpeg4".to_string()]);
    assert_eq!(
        actions,
        vec![
            StreamAction::transcode(0, ActionKind::TranscodeVideo, Some(1_000_000)),
            StreamAction::copy(1),
        ]
    );
}

#[test]
fn test_scenario_b_mp3_audio_in_mkv() {
    let streams = vec![
        StreamDescriptor::video(0, "h264", None),
        StreamDescriptor::audio(1, "mp3", Some(192_000)),
    ];

    let (verdict, actions) = StreamClassifier::classify(&profile(), ".mkv", &streams);

    assert_eq!(verdict.reasons, vec!["audio codec mp3".to_string()]);
    assert_eq!(actions[0], StreamAction::copy(0));
    assert_eq!(
        actions[1],
        StreamAction::transcode(1, ActionKind::TranscodeAudio, Some(192_000))
    );
}

#[test]
fn test_scenario_c_subrip_alone_stays_compliant() {
    let streams = vec![
        StreamDescriptor::video(0, "h264", None),
        StreamDescriptor::audio(1, "aac", None),
        StreamDescriptor::subtitle(2, "subrip"),
    ];

    let (verdict, actions) = StreamClassifier::classify(&profile(), ".mp4", &streams);

    assert!(verdict.is_compliant);
    assert!(verdict.reasons.is_empty());
    assert_eq!(actions[2].action, ActionKind::TranscodeSubtitleToMovText);
}

#[test]
fn test_compliant_codecs_in_compliant_containers() {
    for ext in [".mp4", ".mkv", ".MP4", ".Mkv"] {
        for video in ["h264", "hevc", "h265"] {
            let streams = vec![
                StreamDescriptor::video(0, video, Some(4_000_000)),
                StreamDescriptor::audio(1, "aac", Some(128_000)),
                StreamDescriptor::audio(2, "aac", None),
            ];
            let (verdict, actions) = StreamClassifier::classify(&profile(), ext, &streams);
            assert!(verdict.is_compliant, "{} / {}", ext, video);
            assert!(actions.iter().all(StreamAction::is_copy));
        }
    }
}

#[test]
fn test_attached_picture_is_always_copied() {
    for codec in ["mjpeg", "png", "bmp", "h264"] {
        let streams = vec![
            StreamDescriptor::video(0, "h264", None),
            StreamDescriptor::audio(1, "aac", None),
            StreamDescriptor::video(2, codec, Some(50_000)).with_attached_picture(true),
        ];
        let (verdict, actions) = StreamClassifier::classify(&profile(), ".mp4", &streams);
        assert!(verdict.is_compliant, "cover art {} flagged", codec);
        assert_eq!(actions[2], StreamAction::copy(2));
    }
}

#[test]
fn test_container_reason_precedes_stream_reasons() {
    let streams = vec![
        StreamDescriptor::video(0, "mpeg4", None),
        StreamDescriptor::audio(1, "mp3", None),
    ];

    let (verdict, _) = StreamClassifier::classify(&profile(), ".AVI", &streams);

    assert_eq!(
        verdict.reasons,
        vec![
            "container .AVI".to_string(),
            "video codec mpeg4".to_string(),
            "audio codec mp3".to_string(),
        ]
    );
}

#[test]
fn test_container_alone_is_a_reason() {
    let streams = vec![
        StreamDescriptor::video(0, "h264", None),
        StreamDescriptor::audio(1, "aac", None),
    ];

    let (verdict, actions) = StreamClassifier::classify(&profile(), ".mov", &streams);

    assert_eq!(verdict.reasons, vec!["container .mov".to_string()]);
    assert!(actions.iter().all(StreamAction::is_copy));
}

#[test]
fn test_empty_stream_list_is_compliant() {
    let (verdict, actions) = StreamClassifier::classify(&profile(), ".mkv", &[]);
    assert!(verdict.is_compliant);
    assert!(actions.is_empty());
}

#[test]
fn test_unknown_codec_always_transcodes() {
    let streams = vec![
        StreamDescriptor::new(0, CodecType::Video, None, None),
        StreamDescriptor::new(1, CodecType::Audio, None, Some(64_000)),
    ];

    let (verdict, actions) = StreamClassifier::classify(&profile(), ".mp4", &streams);

    assert_eq!(
        verdict.reasons,
        vec![
            "video codec unknown".to_string(),
            "audio codec unknown".to_string(),
        ]
    );
    assert_eq!(actions[1].target_bit_rate, Some(64_000));
}

#[test]
fn test_image_subtitles_and_data_streams_are_copied() {
    let streams = vec![
        StreamDescriptor::video(0, "h264", None),
        StreamDescriptor::subtitle(1, "hdmv_pgs_subtitle"),
        StreamDescriptor::other(2, "bin_data"),
    ];

    let (verdict, actions) = StreamClassifier::classify(&profile(), ".mkv", &streams);

    assert!(verdict.is_compliant);
    assert_eq!(actions[1], StreamAction::copy(1));
    assert_eq!(actions[2], StreamAction::copy(2));
}

#[test]
fn test_actions_preserve_input_order_and_indices() {
    let streams = vec![
        StreamDescriptor::audio(0, "ac3", None),
        StreamDescriptor::video(1, "vp9", None),
        StreamDescriptor::subtitle(2, "ass"),
        StreamDescriptor::audio(3, "aac", None),
    ];

    let (_, actions) = StreamClassifier::classify(&profile(), ".webm", &streams);
    let indices: Vec<usize> = actions.iter().map(|a| a.stream_index).collect();

    assert_eq!(indices, vec![0, 1, 2, 3]);
}

#[test]
fn test_profile_normalization() {
    let mut custom = ComplianceProfile::default();
    custom.compliant_containers = set_of(&[".MP4", " mov "]);
    custom.target_extension = ".MP4".to_string();
    let custom = custom.normalized();

    assert!(custom.compliant_containers.contains("mp4"));
    assert!(custom.compliant_containers.contains("mov"));
    assert_eq!(custom.target_extension, "mp4");
    assert!(custom.validate().is_ok());
}

#[test]
fn test_profile_validation_rejects_bad_target() {
    let mut custom = ComplianceProfile::default();
    custom.target_extension = "tar.gz".to_string();
    assert!(custom.validate().is_err());

    let mut custom = ComplianceProfile::default();
    custom.audio_encoder = " ".to_string();
    assert!(custom.validate().is_err());
}

#[test]
fn test_profile_validation_rejects_target_outside_compliant_containers() {
    let mut custom = ComplianceProfile::default();
    custom.target_extension = "m4v".to_string();
    let err = custom.normalized().validate().unwrap_err();
    assert!(matches!(err, DomainError::BadArgs(_)));

    let mut custom = ComplianceProfile::default();
    custom.target_extension = "m4v".to_string();
    custom.compliant_containers.insert("m4v".to_string());
    let custom = custom.normalized();
    assert!(custom.validate().is_ok());

    let produced = vec![
        StreamDescriptor::video(0, "h264", None),
        StreamDescriptor::audio(1, "aac", None),
    ];
    let (verdict, _) = StreamClassifier::classify(&custom, ".m4v", &produced);
    assert!(verdict.is_compliant);
}

#[test]
fn test_candidate_extensions() {
    let profile = profile();
    assert!(profile.is_candidate_extension(".AVI"));
    assert!(profile.is_candidate_extension("3gp"));
    assert!(!profile.is_candidate_extension(".bak"));
    assert!(!profile.is_candidate_extension(".txt"));
}
