/**
 * The built-in question banks, used when no bank directory is available.
 */
use super::quiz::Question;

pub fn built_in() -> Vec<Question> {
    let mut questions = signal_processing();
    questions.extend(computer_graphics());
    questions
}

fn question(
    prompt: &str,
    options: &[(&str, &str)],
    correct: &[&str],
    explain_correct: &str,
    explain_wrong: &[(&str, &str)],
    topic: &str,
) -> Question {
    let mut q = Question::new(prompt);
    for (key, text) in options {
        q.options.insert(String::from(*key), String::from(*text));
    }
    for key in correct {
        q.correct.insert(String::from(*key));
    }
    q.explain_correct = String::from(explain_correct);
    for (key, text) in explain_wrong {
        q.explain_wrong.insert(String::from(*key), String::from(*text));
    }
    q.topic = String::from(topic);
    q
}

fn signal_processing() -> Vec<Question> {
    vec![
        question(
            "Which principle allows a signal to be converted between the time \
             domain and the frequency domain, and back?",
            &[
                ("A", "The Laplace transform"),
                ("B", "The Fourier principle / Fourier transform"),
                ("C", "The Nyquist theorem"),
                ("D", "The Shannon theorem"),
            ],
            &["B"],
            "The Fourier principle converts between the time and frequency \
             domains: the DFT maps a sampled signal into its frequency \
             components and the inverse DFT maps them back.",
            &[
                ("A", "The Laplace transform generalizes the idea but is not the \
                       standard tool for time/frequency conversion."),
                ("C", "The Nyquist theorem is about the minimum sampling rate, \
                       not about transforming between domains."),
                ("D", "The Shannon theorem is another name for the sampling \
                       theorem, which likewise concerns sampling rates."),
            ],
            "Signal Processing",
        ),
        question(
            "What does the Fourier synthesis describe?",
            &[
                ("A", "Decomposing a signal into its individual frequencies"),
                ("B", "Building a signal by superimposing sine waves"),
                ("C", "Digitizing an analog signal"),
                ("D", "Filtering out interfering frequencies"),
            ],
            &["B"],
            "Fourier synthesis builds an arbitrary periodic signal by adding \
             sine and cosine waves of different frequencies, amplitudes and \
             phases. It is the counterpart of Fourier analysis.",
            &[
                ("A", "That is Fourier analysis, not synthesis."),
                ("C", "Digitization happens through sampling and quantization."),
                ("D", "Filtering is a separate processing step."),
            ],
            "Signal Processing",
        ),
        question(
            "Which steps are part of digitizing an analog signal? (multiple choice)",
            &[
                ("A", "Sampling"),
                ("B", "Quantization"),
                ("C", "Modulation"),
                ("D", "Interpolation"),
            ],
            &["A", "B"],
            "Digitization means sampling the signal at discrete points in time \
             and quantizing each sample to a discrete amplitude value.",
            &[
                ("C", "Modulation shifts a signal onto a carrier; it is a \
                       transmission technique, not part of digitization."),
                ("D", "Interpolation reconstructs values between samples and \
                       happens on playback, not while digitizing."),
            ],
            "Signal Processing",
        ),
        question(
            "A signal contains frequencies up to 8 kHz. What is the minimum \
             sampling rate required to reconstruct it without aliasing?",
            &[
                ("A", "4 kHz"),
                ("B", "8 kHz"),
                ("C", "16 kHz"),
                ("D", "32 kHz"),
                ("E", "44.1 kHz"),
            ],
            &["C"],
            "The sampling theorem requires sampling at more than twice the \
             highest signal frequency, so an 8 kHz signal needs at least a \
             16 kHz sampling rate.",
            &[
                ("A", "Half the signal bandwidth is far too low; everything \
                       above 2 kHz would alias."),
                ("B", "Sampling at the signal's own top frequency still loses \
                       half of every cycle."),
                ("D", "32 kHz works but is not the minimum."),
                ("E", "44.1 kHz is the CD standard, chosen for 20 kHz audio, \
                       not the minimum for 8 kHz."),
            ],
            "Signal Processing",
        ),
    ]
}

fn computer_graphics() -> Vec<Question> {
    vec![
        question(
            "Which color model is typically used for emissive displays?",
            &[
                ("A", "CMYK"),
                ("B", "RGB"),
                ("C", "HSV"),
                ("D", "YCbCr"),
            ],
            &["B"],
            "Displays emit light, and mixing red, green and blue light \
             additively can produce the visible color range, so displays work \
             in RGB.",
            &[
                ("A", "CMYK is a subtractive model used for print."),
                ("C", "HSV is a re-parameterization for picking colors, not a \
                       display primary model."),
                ("D", "YCbCr separates luma and chroma for transmission and \
                       compression."),
            ],
            "Computer Graphics",
        ),
        question(
            "What does the z-buffer store for each pixel?",
            &[
                ("A", "The pixel's color value"),
                ("B", "The depth of the nearest drawn surface"),
                ("C", "The surface normal"),
                ("D", "The texture coordinates"),
            ],
            &["B"],
            "The z-buffer keeps, per pixel, the depth of the closest fragment \
             drawn so far; a new fragment is only drawn if it is closer.",
            &[
                ("A", "Colors live in the frame buffer."),
                ("C", "Normals are interpolated during shading but not stored \
                       per pixel in the z-buffer."),
                ("D", "Texture coordinates are vertex attributes."),
            ],
            "Computer Graphics",
        ),
        question(
            "Which of these are affine transformations? (multiple choice)",
            &[
                ("A", "Translation"),
                ("B", "Rotation"),
                ("C", "Perspective projection"),
                ("D", "Scaling"),
            ],
            &["A", "B", "D"],
            "Translation, rotation and scaling preserve parallel lines and can \
             be written as a linear map plus a translation, which is exactly \
             what affine means.",
            &[
                ("C", "Perspective projection divides by depth and does not \
                       preserve parallelism, so it is projective, not affine."),
            ],
            "Computer Graphics",
        ),
    ]
}
