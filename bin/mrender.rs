/*
MIT License
Copyright (c) 2021 Germán Molina
Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:
The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.
THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
*/

use clap::{Parser, ValueEnum};
use metaray::demo::{demo_scene, demo_view};
use metaray::{
    ApertureCamera, Camera, ConfigError, ExposureCompensation, Film, Float, Pinhole, Point3D,
    RayTracer, RelativisticCamera, Scene, Stereo, StereoMode, Vector3D, VelocityTransform, View,
};

#[derive(Debug, Clone, Copy)]
struct Triplet(Float, Float, Float);

impl std::fmt::Display for Triplet {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {} {}", self.0, self.1, self.2)
    }
}

impl std::str::FromStr for Triplet {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let st: Vec<&str> = s.split_whitespace().collect();
        if st.len() != 3 {
            return Err(format!(
                "Expecting three values (e.g., '1. 2. 3')... found '{}'",
                s
            ));
        }
        let mut values = [0.; 3];
        for (i, (v, txt)) in values.iter_mut().zip(st.iter()).enumerate() {
            *v = txt.parse::<Float>().map_err(|_| {
                format!(
                    "Expecting value {} in triplet to be a number... found '{}'",
                    i + 1,
                    txt
                )
            })?;
        }
        Ok(Self(values[0], values[1], values[2]))
    }
}

impl From<Triplet> for Vector3D {
    fn from(t: Triplet) -> Self {
        Vector3D::new(t.0, t.1, t.2)
    }
}

impl From<Triplet> for Point3D {
    fn from(t: Triplet) -> Self {
        Point3D::new(t.0, t.1, t.2)
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StereoOption {
    Anaglyph,
    ColourAnaglyph,
    SideBySide,
}

impl From<StereoOption> for StereoMode {
    fn from(o: StereoOption) -> Self {
        match o {
            StereoOption::Anaglyph => StereoMode::Anaglyph,
            StereoOption::ColourAnaglyph => StereoMode::ColourAnaglyph,
            StereoOption::SideBySide => StereoMode::SideBySide,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum TransformOption {
    Lorentz,
    Galileo,
}

impl From<TransformOption> for VelocityTransform {
    fn from(o: TransformOption) -> Self {
        match o {
            TransformOption::Lorentz => VelocityTransform::Lorentz,
            TransformOption::Galileo => VelocityTransform::Galileo,
        }
    }
}

/// Renders a scene with non-standard optical components and prints
/// a preview of it on the terminal
#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Inputs {
    /// A scene in JSON format. The built-in demonstration scene is used if missing.
    #[clap(short, long)]
    pub input: Option<String>,

    /* Ray-tracer data */
    /// The number of surface interactions before a ray is terminated
    #[clap(short = 'b', long = "max_depth", default_value_t = 100)]
    pub max_depth: usize,

    /// The number of samples per pixel
    #[clap(short = 's', long = "samples", default_value_t = 1)]
    pub n_samples: usize,

    /// Exposure compensation, in stops
    #[clap(short = 'e', long, default_value_t = 0, allow_hyphen_values = true)]
    pub exposure: i32,

    /* Film */
    /// The Horizontal resolution of the final image
    #[clap(short = 'x', long, default_value_t = 160)]
    pub x: usize,

    /// The Vertical resolution of the final image
    #[clap(short = 'y', long, default_value_t = 100)]
    pub y: usize,

    /// The width of the terminal preview, in characters
    #[clap(short = 'c', long, default_value_t = 80)]
    pub columns: usize,

    /* VIEW */
    /// The view point (e.g., '-p "0. 1. 2"')
    #[clap(short = 'p', long, allow_hyphen_values = true)]
    pub view_point: Option<Triplet>,

    /// The view direction (Does not need to be normalized. e.g., '-d "-3. 1. 2"')
    #[clap(short = 'd', long, allow_hyphen_values = true)]
    pub view_direction: Option<Triplet>,

    /// The view up (e.g., '-u "0. 0. 1"')
    #[clap(short = 'u', long, allow_hyphen_values = true)]
    pub view_up: Option<Triplet>,

    /// The horizontal field of view, in degrees
    #[clap(short = 'f', long = "view_horizontal")]
    pub field_of_view: Option<Float>,

    /* Camera */
    /// The radius of the aperture. Zero means a pinhole camera.
    #[clap(long, default_value_t = 0.)]
    pub aperture: Float,

    /// The distance at which an aperture camera is focused
    #[clap(long, default_value_t = 6.)]
    pub focus_distance: Float,

    /// The velocity of the camera, in units of c (e.g., '--beta "0 0.5 0"')
    #[clap(long, allow_hyphen_values = true)]
    pub beta: Option<Triplet>,

    /// How the velocity of the camera transforms directions
    #[clap(long, value_enum, default_value_t = TransformOption::Lorentz)]
    pub transform: TransformOption,

    /// Render a stereo pair instead of a single image
    #[clap(long, value_enum)]
    pub stereo: Option<StereoOption>,

    /// The distance between the eyes of a stereo pair
    #[clap(long, default_value_t = 0.065)]
    pub eye_separation: Float,
}

fn load_scene(input: &Option<String>) -> Result<Scene, String> {
    match input {
        Some(file) => {
            let txt = std::fs::read_to_string(file)
                .map_err(|e| format!("Could not read file '{}': {}", file, e))?;
            let scene: Scene = serde_json::from_str(&txt)
                .map_err(|e| format!("Could not parse '{}': {}", file, e))?;
            scene
                .validate()
                .map_err(|e| format!("Invalid scene in '{}': {}", file, e))?;
            Ok(scene)
        }
        None => demo_scene().map_err(|e| e.to_string()),
    }
}

fn build_view(inputs: &Inputs) -> View {
    let default = demo_view();
    View {
        view_point: inputs.view_point.map(Point3D::from).unwrap_or(default.view_point),
        view_direction: inputs
            .view_direction
            .map(Vector3D::from)
            .unwrap_or(default.view_direction),
        view_up: inputs.view_up.map(Vector3D::from).unwrap_or(default.view_up),
        field_of_view: inputs.field_of_view.unwrap_or(default.field_of_view),
    }
}

fn moving<C: Camera + 'static>(
    camera: C,
    beta: Option<Triplet>,
    transform: TransformOption,
) -> Result<Box<dyn Camera>, ConfigError> {
    match beta {
        Some(beta) => Ok(Box::new(RelativisticCamera::new(
            camera,
            beta.into(),
            transform.into(),
        )?)),
        None => Ok(Box::new(camera)),
    }
}

fn build_camera(inputs: &Inputs, view: View, film: Film) -> Result<Box<dyn Camera>, ConfigError> {
    if inputs.aperture > 0. {
        let camera = ApertureCamera::new(view, film, inputs.aperture, inputs.focus_distance)?;
        moving(camera, inputs.beta, inputs.transform)
    } else {
        let camera = Pinhole::new(view, film)?;
        moving(camera, inputs.beta, inputs.transform)
    }
}

fn main() -> Result<(), String> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let inputs = Inputs::parse();

    let scene = load_scene(&inputs.input)?;
    log::info!("Loaded a scene with {} objects", scene.n_objects());

    let film = Film {
        resolution: (inputs.x, inputs.y),
    };
    let view = build_view(&inputs);

    let tracer = RayTracer {
        max_depth: inputs.max_depth,
        n_samples: inputs.n_samples,
        exposure: ExposureCompensation(inputs.exposure),
        ..RayTracer::default()
    };

    let image = match inputs.stereo {
        Some(mode) => {
            if inputs.beta.is_some() || inputs.aperture > 0. {
                log::warn!("Stereo pairs are rendered with pinhole cameras at rest");
            }
            let stereo = Stereo::new(view, film, inputs.eye_separation, mode.into())
                .map_err(|e| e.to_string())?;
            tracer.render_stereo(&scene, &stereo)
        }
        None => {
            let camera = build_camera(&inputs, view, film).map_err(|e| e.to_string())?;
            tracer.render(&scene, camera.as_ref())
        }
    }
    .map_err(|e| e.to_string())?;

    print!("{}", image.to_ascii(inputs.columns));
    Ok(())
}
