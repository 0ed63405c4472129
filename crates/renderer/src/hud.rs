use types::{DemoConfig, DisplayState, SimParams};

/// Colour family of the FPS readout and mode icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Native,
    Generated,
}

impl Accent {
    pub fn as_str(self) -> &'static str {
        match self {
            Accent::Native => "native",
            Accent::Generated => "generated",
        }
    }
}

/// Icon on the play/pause button: shows the action it will perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayGlyph {
    Play,
    Pause,
}

impl PlayGlyph {
    pub fn as_str(self) -> &'static str {
        match self {
            PlayGlyph::Play => "play",
            PlayGlyph::Pause => "pause",
        }
    }
}

/// Text and flags for the DOM around the canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct HudText {
    pub mode_label: &'static str,
    pub fps_readout: String,
    pub accent: Accent,
    pub frame_gen_caption: String,
    pub slow_motion_caption: String,
    pub play_glyph: PlayGlyph,
    pub marker_badge: &'static str,
    pub generated_legend_visible: bool,
    pub explanation: &'static str,
}

const MODE_GENERATED: &str = "模式: LSFG (补帧开启)";
const MODE_NATIVE: &str = "模式: 原生渲染 (低帧率)";
const EXPLAIN_GENERATED: &str = "正在运行 LSFG 模式：虚线框代表原始渲染位置，实心方块是屏幕实际显示的画面。\
即使原始游戏很卡顿 (蓝框跳跃)，LSFG 也能通过预测生成中间帧 (变黄)，让移动看起来如丝般顺滑。";
const EXPLAIN_NATIVE: &str = "正在运行原生模式：这是游戏原本的样子。\
由于帧率较低，物体移动时会出现明显的“瞬移”或卡顿感。";

impl HudText {
    pub fn new(display: &DisplayState, config: &DemoConfig, params: &SimParams) -> Self {
        let frame_gen = config.frame_gen_enabled;
        let frame_gen_caption = if frame_gen {
            format!("已开启 (模拟 {} FPS)", params.generated_fallback_fps)
        } else {
            format!("已关闭 (模拟 {} FPS)", params.native_display_fps(1.0))
        };
        let speed = (config.time_scale(params) * 100.0).round() as u32;

        Self {
            mode_label: if frame_gen { MODE_GENERATED } else { MODE_NATIVE },
            fps_readout: display.display_fps.to_string(),
            accent: if frame_gen { Accent::Generated } else { Accent::Native },
            frame_gen_caption,
            slow_motion_caption: format!("速度: {speed}%"),
            play_glyph: if config.playing { PlayGlyph::Pause } else { PlayGlyph::Play },
            marker_badge: if frame_gen && display.is_generated_frame { "AI" } else { "GPU" },
            generated_legend_visible: frame_gen,
            explanation: if frame_gen { EXPLAIN_GENERATED } else { EXPLAIN_NATIVE },
        }
    }
}
