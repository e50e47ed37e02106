// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! Rational approximants for the density.

use super::{Rational, Segment};

/// Segments on `u ∈ [0, 64]`, evaluated at `u - lower`.
pub(crate) const PDF_PLUS: [Segment; 7] = [
    Segment {
        lower: 0.0,
        upper: 1.0,
        f: Rational {
            numer: &[
                0.19751617184719186,
                0.06569758363029606,
                0.004348180988229002,
                0.0026887425900327835,
                0.0003824894779794722,
                -6.680025876825929e-05,
                9.880389806100694e-06,
                -5.349486761935147e-07,
            ],
            denom: &[
                1.0,
                0.856028341809324,
                0.4700677423753593,
                0.16705814100661798,
                0.04403914097790932,
                0.008228016722321886,
                0.0010629136586296965,
                8.086393814844619e-05,
            ],
        },
    },
    Segment {
        lower: 1.0,
        upper: 2.0,
        f: Rational {
            numer: &[
                0.10625124301323875,
                0.018419309608771594,
                0.004459210709210141,
                0.0008848051452508861,
                -3.939760715255991e-05,
                6.583153592733488e-06,
                -3.3351090592539623e-07,
            ],
            denom: &[
                1.0,
                0.8541607206601236,
                0.42135221924679483,
                0.12843409048436105,
                0.02706318763347216,
                0.003546466591753476,
                0.000270383031044898,
            ],
        },
    },
    Segment {
        lower: 2.0,
        upper: 4.0,
        f: Rational {
            numer: &[
                0.053384251489198946,
                0.023459285933398088,
                0.007715678683525228,
                0.00151599943526298,
                0.0001976097759792474,
                1.6187949523782883e-05,
                3.8840652389837866e-07,
                -4.280145570468851e-09,
                4.441406996878647e-11,
            ],
            denom: &[
                1.0,
                1.1172443521772693,
                0.6474916655546968,
                0.24113304983048886,
                0.06286349317328194,
                0.01167236387857363,
                0.0015208682583617065,
                0.00012801979107196967,
                5.613890996702171e-06,
            ],
        },
    },
    Segment {
        lower: 4.0,
        upper: 8.0,
        f: Rational {
            numer: &[
                0.015895053858313347,
                0.007931557067878103,
                0.002103511347396655,
                0.00030234374501782163,
                2.4674773763312576e-05,
                7.57734800256077e-07,
                2.5330100516940937e-09,
                1.270410959350021e-11,
                -2.2607519662435444e-13,
            ],
            denom: &[
                1.0,
                1.024017619302327,
                0.49223150266641547,
                0.14221658447261495,
                0.02664872358747961,
                0.0032563732391922926,
                0.0002457095267414067,
                9.698222319879731e-06,
                1.143085599145986e-07,
            ],
        },
    },
    Segment {
        lower: 8.0,
        upper: 16.0,
        f: Rational {
            numer: &[
                0.0032251755152504216,
                0.0011318939525905773,
                0.00015556633343029612,
                9.394925929662259e-06,
                2.0982305903519947e-07,
                9.273690256831006e-10,
                -2.225326403629322e-12,
                6.6883480227403e-15,
            ],
            denom: &[
                1.0,
                0.6545271143247636,
                0.18343802010043225,
                0.028208847911448027,
                0.0025302791437454963,
                0.00012918835533861213,
                3.3358886901616384e-06,
                3.129901436057618e-08,
            ],
        },
    },
    Segment {
        lower: 16.0,
        upper: 32.0,
        f: Rational {
            numer: &[
                0.0005825276632328573,
                0.00013446450196028694,
                1.2281250126475021e-05,
                5.583998765522496e-07,
                1.3155260171106414e-08,
                1.5216687925125763e-10,
                7.227844001500324e-13,
                7.521380540053614e-16,
                -4.647486531000361e-19,
                3.878947745696866e-22,
            ],
            denom: &[
                1.0,
                0.38648442718226456,
                0.06431770951396942,
                0.006002320261632581,
                0.0003427280480427929,
                1.2253872423492912e-05,
                2.694558835282807e-07,
                3.426563041179168e-09,
                2.204377376307919e-11,
                5.1687874934868636e-14,
            ],
        },
    },
    Segment {
        lower: 32.0,
        upper: 64.0,
        f: Rational {
            numer: &[
                0.00010326485337934988,
                6.92563813061061e-06,
                1.6221454991329258e-07,
                1.5785721876684317e-09,
                5.780265451778554e-12,
                4.41108066526694e-15,
                -1.9396311857622043e-18,
                1.1299865431987701e-21,
            ],
            denom: &[
                1.0,
                0.14515424564714466,
                0.008638401012930993,
                0.00027024376869864123,
                4.727030516047719e-06,
                4.522002851679606e-08,
                2.1186807413343757e-10,
                3.55658055871961e-13,
            ],
        },
    },
];

/// Tail beyond `u = 64`, evaluated at `w = u^(-3/2) ∈ (0, 1/512]`.
pub(crate) const PDF_PLUS_LIMIT: Rational = Rational {
    numer: &[
        0.598413420602149,
        0.00014429851368530445,
        40.38248434484809,
        0.001975228778317216,
        223.01401831616434,
    ],
    denom: &[
        1.0,
        0.00024113515626054163,
        80.60758470575996,
        0.006465675128125446,
        1078.7359827322177,
    ],
};

/// Direct segments on `v = -u ∈ [0, 2]`.
pub(crate) const PDF_MINUS: [Segment; 2] = [
    Segment {
        lower: 0.0,
        upper: 1.0,
        f: Rational {
            numer: &[
                0.19751617184719186,
                0.2647214400170438,
                -0.12635434702055356,
                0.014823936738107337,
                -0.004720295141405541,
                0.0011319361678502494,
                3.0141443463292206e-05,
                -7.29327762415257e-07,
                -2.419717046289751e-06,
                -2.4514001296717475e-07,
            ],
            denom: &[
                1.0,
                0.8168423935700967,
                -1.0672596017295175,
                0.7262582593652347,
                -0.29447055522291077,
                0.08875035987365246,
                -0.019032799044729966,
                0.0030824655660167976,
                -0.0003248553648441582,
                2.1826677451758174e-05,
            ],
        },
    },
    Segment {
        lower: 1.0,
        upper: 2.0,
        f: Rational {
            numer: &[
                0.2768598688567468,
                -0.1780706237050135,
                0.026243077787698348,
                0.0006062122483486127,
                0.0010620788264688375,
                -0.0002776877098653127,
                -3.179779411775338e-05,
                3.8139742504757346e-06,
                9.245123682518764e-07,
            ],
            denom: &[
                1.0,
                -0.7427711974748641,
                0.4576055739634987,
                -0.1701333289159558,
                0.05455382139613525,
                -0.012008060639767355,
                0.002295846341338307,
                -0.00026648177391074706,
                2.6364863116393356e-05,
            ],
        },
    },
];

/// Scaled segments on `v ∈ (2, 32]`; the caller applies the tail factor.
pub(crate) const PDF_MINUS_TAIL: [Segment; 4] = [
    Segment {
        lower: 2.0,
        upper: 4.0,
        f: Rational {
            numer: &[
                0.274308494787956,
                0.5261990207739199,
                0.44876523606931656,
                0.22697813173442613,
                0.07571898342200413,
                0.017277894881034508,
                0.002666016561310016,
                0.0002580185254671389,
                1.2309966597572108e-05,
            ],
            denom: &[
                1.0,
                1.9526778153447952,
                1.6786052700170326,
                0.8513679024240525,
                0.2844493940711928,
                0.06494536381159241,
                0.010024165877425164,
                0.0009701296009465857,
                4.628490113171038e-05,
            ],
        },
    },
    Segment {
        lower: 4.0,
        upper: 8.0,
        f: Rational {
            numer: &[
                0.2673915477074566,
                0.3967815306276822,
                0.2670324322643362,
                0.10688689846760066,
                0.02792126939078881,
                0.004888385537305071,
                0.0005619045361513499,
                3.8912416914484635e-05,
                1.2488671905043715e-06,
            ],
            denom: &[
                1.0,
                1.4876123606158933,
                1.002511971658385,
                0.40158578527240735,
                0.10494861967047762,
                0.01837828785816632,
                0.00211272866794223,
                0.0001463084476026131,
                4.695668702701521e-06,
            ],
        },
    },
    Segment {
        lower: 8.0,
        upper: 16.0,
        f: Rational {
            numer: &[
                0.2661539019321003,
                0.23379782324331025,
                0.08922662177848185,
                0.019171905683128168,
                0.002503706143883579,
                0.00019859685440679477,
                8.851597199733507e-06,
                1.7079527066070363e-07,
            ],
            denom: &[
                1.0,
                0.8786987097662045,
                0.33541400201254434,
                0.07207856034590762,
                0.00941355010021909,
                0.0007467127357522154,
                3.328149572494106e-05,
                6.421803819152991e-07,
            ],
        },
    },
    Segment {
        lower: 16.0,
        upper: 32.0,
        f: Rational {
            numer: &[
                0.26598583092892975,
                0.08708881960133395,
                0.011448882257544174,
                0.0007548559125101248,
                2.4944356389859078e-05,
                3.302748771893232e-07,
            ],
            denom: &[
                1.0,
                0.32743612806192646,
                0.043046672289526265,
                0.002838214760347877,
                9.378934352902694e-05,
                1.2418145183440415e-06,
            ],
        },
    },
];
